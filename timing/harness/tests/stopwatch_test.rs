// Licensed under the Apache-2.0 license

mod mock_counter;

use bench_harness::{run_timed, Capture, Measurement, Stopwatch};
use bench_timing::{
    CounterSample, DurationEstimator, ElapsedTicks, Seconds, TicksPerSecond, TimerConfig,
    EPOCH_TICKS,
};
use bench_timing_hil::CycleCounter;
use log::LevelFilter;
use mock_counter::MockCounter;
use simple_logger::SimpleLogger;

fn init_logger() {
    // Several tests share the process; only the first init succeeds.
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

#[test]
fn test_run_timed_brackets_workload() {
    init_logger();
    let counter = MockCounter::new(&[
        CounterSample::new(1_000, 0),
        CounterSample::new(3_001_000, 0),
    ]);
    let estimator = DurationEstimator::from_config(&TimerConfig::DEFAULT).unwrap();

    let (result, measurement) = run_timed(&counter, || {
        // The start sample is taken before the workload runs.
        assert_eq!(counter.captures(), 1);
        (1..=10u32).sum::<u32>()
    });

    assert_eq!(result, 55);
    assert_eq!(counter.captures(), 2);
    assert_eq!(counter.remaining(), 0);
    assert_eq!(measurement.seconds(&estimator), Seconds(3));
}

#[test]
fn test_stopwatch_across_wraparound() {
    init_logger();
    let counter = MockCounter::new(&[
        CounterSample::new(0xFFFF_FFF0, 5),
        CounterSample::new(0x0000_0010, 6),
    ]);
    let estimator = DurationEstimator::new(TicksPerSecond::new_const(1_000_000));

    let stopwatch = Stopwatch::start(&counter);
    assert_eq!(stopwatch.start_sample(), CounterSample::new(0xFFFF_FFF0, 5));
    let measurement = stopwatch.stop(&counter);

    assert_eq!(
        measurement,
        Measurement::split(
            CounterSample::new(0xFFFF_FFF0, 5),
            CounterSample::new(0x0000_0010, 6)
        )
    );
    let Measurement::Split { start, stop } = measurement else {
        panic!("split counter produced {measurement:?}");
    };
    assert_eq!(ElapsedTicks::between(start, stop).high_delta, 0);
    assert_eq!(
        measurement.seconds(&estimator),
        Seconds(u64::from(0xFFFF_FFE0u32 / 1_000_000))
    );
}

#[test]
fn test_long_run_spans_epochs() {
    init_logger();
    let counter = MockCounter::new(&[
        CounterSample::new(0x1000, 2),
        CounterSample::new(0x2000, 12),
    ]);
    let estimator = DurationEstimator::from_config(&TimerConfig::new(100_000_000, 1)).unwrap();

    let ((), measurement) = run_timed(&counter, || {});

    let expected = (10 * u64::from(EPOCH_TICKS) + 0x1000) / 100_000_000;
    assert_eq!(measurement.seconds(&estimator), Seconds(expected));
}

#[test]
fn test_stalled_counter_is_zero() {
    init_logger();
    let sample = CounterSample::new(0xDEAD_BEEF, 7);
    let counter = MockCounter::new(&[sample, sample]);
    let estimator = DurationEstimator::new(TicksPerSecond::new_const(1));

    let ((), measurement) = run_timed(&counter, || {});

    assert!(measurement.is_zero());
    assert_eq!(measurement.seconds(&estimator), Seconds::ZERO);
}

#[test]
fn test_wide_counter_crosses_low_word() {
    init_logger();
    // 32 ticks that cross a 2^32 boundary of a full-width counter.
    let counter = MockCounter::wide(&[0xFFFF_FFF0, 0x1_0000_0010]);
    let estimator = DurationEstimator::new(TicksPerSecond::new_const(1_000_000));

    let ((), measurement) = run_timed(&counter, || {});

    assert_eq!(measurement, Measurement::wide(0xFFFF_FFF0, 0x1_0000_0010));
    assert_eq!(measurement.ticks(), 32);
    assert_eq!(measurement.seconds(&estimator), Seconds::ZERO);
}

#[test]
fn test_wide_counter_long_run() {
    init_logger();
    let start = 0x8000_0000u64;
    let counter = MockCounter::wide(&[start, start + 10_000_000_000]);
    let estimator = DurationEstimator::new(TicksPerSecond::new_const(1_000_000_000));

    let stopwatch = Stopwatch::start(&counter);
    assert_eq!(stopwatch.start_capture(), Capture::Wide(start));
    let measurement = stopwatch.stop(&counter);

    assert_eq!(measurement.seconds(&estimator), Seconds(10));
}

#[test]
fn test_counter_through_reference() {
    let counter = MockCounter::wide(&[0x1_0000_0001]);
    let by_ref: &dyn CycleCounter = &counter;
    assert_eq!(by_ref.capture_wide(), Some(0x1_0000_0001));
    assert_eq!(counter.captures(), 1);
}
