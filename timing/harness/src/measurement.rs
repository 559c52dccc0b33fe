// Licensed under the Apache-2.0 license

use bench_timing::{CounterSample, DurationEstimator, ElapsedTicks, Seconds};

/// One counter capture, split into halves or read at full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Split(CounterSample),
    Wide(u64),
}

impl Capture {
    pub fn sample(&self) -> CounterSample {
        match *self {
            Capture::Split(sample) => sample,
            Capture::Wide(value) => CounterSample::from_u64(value),
        }
    }
}

/// Start and stop captures of one timed region.
///
/// `Wide` is only produced when both ends were full-width atomic reads;
/// its span is a plain 64-bit difference. Everything else goes through the
/// split-word reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Split {
        start: CounterSample,
        stop: CounterSample,
    },
    Wide {
        start: u64,
        stop: u64,
    },
}

impl Measurement {
    pub const fn split(start: CounterSample, stop: CounterSample) -> Self {
        Measurement::Split { start, stop }
    }

    pub const fn wide(start: u64, stop: u64) -> Self {
        Measurement::Wide { start, stop }
    }

    pub fn from_captures(start: Capture, stop: Capture) -> Self {
        match (start, stop) {
            (Capture::Wide(start), Capture::Wide(stop)) => Self::wide(start, stop),
            (start, stop) => Self::split(start.sample(), stop.sample()),
        }
    }

    /// Abstract tick span of the region.
    pub fn ticks(&self) -> u64 {
        match *self {
            Measurement::Split { start, stop } => ElapsedTicks::between(start, stop).total(),
            Measurement::Wide { start, stop } => stop.wrapping_sub(start),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.ticks() == 0
    }

    pub fn seconds(&self, estimator: &DurationEstimator) -> Seconds {
        match *self {
            Measurement::Split { start, stop } => estimator.elapsed_seconds(start, stop),
            Measurement::Wide { start, stop } => estimator.elapsed_seconds_wide(start, stop),
        }
    }
}
