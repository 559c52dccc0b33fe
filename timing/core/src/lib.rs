/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Cycle-counter based benchmark timing.

    Converts a pair of split (low/high word) cycle counter samples into
    whole seconds using integer arithmetic only.

--*/

#![no_std]

pub mod config;
pub mod error;
pub mod estimator;
pub mod sample;

pub use config::{TicksPerSecond, TimerConfig, EMULATOR_CPU_CLOCK_HZ};
pub use error::{TimingError, TimingResult};
pub use estimator::{
    elapsed_seconds, elapsed_seconds_raw, elapsed_seconds_widened, DurationEstimator,
    ElapsedTicks, Seconds, EPOCH_TICKS,
};
pub use sample::CounterSample;
