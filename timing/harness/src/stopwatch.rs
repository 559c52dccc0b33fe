/*++

Licensed under the Apache-2.0 license.

File Name:

    stopwatch.rs

Abstract:

    Captures the bracketing counter samples of a timed region.

--*/

use crate::measurement::{Capture, Measurement};
use bench_timing::CounterSample;
use bench_timing_hil::CycleCounter;

/// A running measurement. Holds only the start capture.
///
/// Stopping consumes the stopwatch, so a region is stopped exactly once.
#[derive(Debug)]
#[must_use = "a started stopwatch must be stopped to produce a measurement"]
pub struct Stopwatch {
    start: Capture,
}

fn capture<C: CycleCounter>(counter: &C) -> Capture {
    match counter.capture_wide() {
        Some(value) => Capture::Wide(value),
        None => Capture::Split(counter.capture_sample()),
    }
}

impl Stopwatch {
    // Start timing
    //
    // Called right before the timed portion of the benchmark.
    pub fn start<C: CycleCounter>(counter: &C) -> Self {
        let start = capture(counter);
        log::debug!("stopwatch: start {:x?}", start);
        Self { start }
    }

    pub fn start_capture(&self) -> Capture {
        self.start
    }

    pub fn start_sample(&self) -> CounterSample {
        self.start.sample()
    }

    // Stop timing
    //
    // Called right after the timed portion of the benchmark.
    pub fn stop<C: CycleCounter>(self, counter: &C) -> Measurement {
        let stop = capture(counter);
        log::debug!("stopwatch: stop {:x?}", stop);
        Measurement::from_captures(self.start, stop)
    }
}

/// Run `workload` between a start and a stop capture of `counter`.
pub fn run_timed<C, F, R>(counter: &C, workload: F) -> (R, Measurement)
where
    C: CycleCounter,
    F: FnOnce() -> R,
{
    let stopwatch = Stopwatch::start(counter);
    let result = workload();
    let measurement = stopwatch.stop(counter);
    log::trace!("stopwatch: {} ticks", measurement.ticks());
    (result, measurement)
}
