/*++

Licensed under the Apache-2.0 license.

File Name:

    estimator.rs

Abstract:

    Conversion of split cycle counter samples into whole seconds.

    The counter is read as two 32-bit halves that are not sampled
    atomically. The elapsed span is reconciled across the low-word
    wraparound and then converted one epoch at a time so that only 32-bit
    division is needed.

--*/

use crate::config::{TicksPerSecond, TimerConfig};
use crate::error::TimingResult;
use crate::sample::CounterSample;
use core::cmp::Ordering;
use core::fmt;

/// Ticks credited for every elapsed high-word epoch.
///
/// This is `2^32 - 1`, not `2^32`. Reported durations stay comparable with
/// results produced by existing ports of the harness.
pub const EPOCH_TICKS: u32 = u32::MAX;

/// Whole seconds. The sub-second remainder is always discarded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds(pub u64);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0);

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Convert a full-width tick count with a single division.
    pub fn from_ticks(ticks: u64, ticks_per_second: TicksPerSecond) -> Self {
        Self(ticks / u64::from(ticks_per_second.get()))
    }

    /// Elapsed seconds between two reads of a native 64-bit counter.
    pub fn between_wide(start: u64, stop: u64, ticks_per_second: TicksPerSecond) -> Self {
        Self::from_ticks(stop.wrapping_sub(start), ticks_per_second)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Seconds> for u64 {
    fn from(seconds: Seconds) -> Self {
        seconds.0
    }
}

/// Span between two samples, reconciled across a low-word wraparound.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTicks {
    pub low_delta: u32,
    pub high_delta: u32,
}

impl ElapsedTicks {
    /// Reconcile `start` and `stop`.
    ///
    /// The order of the low words alone selects the branch. A `stop.low`
    /// below `start.low` is taken as exactly one wrap and charges one epoch
    /// less. Equal low words are a whole number of epochs with no wrap, so
    /// identical samples give an empty span. The high words are only trusted
    /// as a wrap tally: a stop high word behind the start one clamps to zero
    /// epochs instead of underflowing.
    pub fn between(start: CounterSample, stop: CounterSample) -> Self {
        let high_delta = stop.high.saturating_sub(start.high);
        match stop.low.cmp(&start.low) {
            Ordering::Greater => Self {
                low_delta: stop.low - start.low,
                high_delta,
            },
            Ordering::Less => Self {
                low_delta: start.low - stop.low,
                high_delta: high_delta.saturating_sub(1),
            },
            Ordering::Equal => Self {
                low_delta: 0,
                high_delta,
            },
        }
    }

    /// Tick count with every epoch weighted by [`EPOCH_TICKS`].
    pub const fn total(&self) -> u64 {
        self.high_delta as u64 * EPOCH_TICKS as u64 + self.low_delta as u64
    }

    pub const fn is_zero(&self) -> bool {
        self.low_delta == 0 && self.high_delta == 0
    }

    /// Convert to seconds one epoch at a time.
    ///
    /// Every division and remainder is 32-bit. The running remainder stays
    /// below `ticks_per_second` after each epoch, which makes the result
    /// identical to [`ElapsedTicks::to_seconds_widened`].
    pub fn to_seconds(&self, ticks_per_second: TicksPerSecond) -> Seconds {
        let rate = ticks_per_second.get();
        let epoch_seconds = EPOCH_TICKS / rate;
        let epoch_remainder = EPOCH_TICKS % rate;

        let mut seconds = u64::from(self.low_delta / rate);
        let mut remainder = self.low_delta % rate;
        let mut epochs = self.high_delta;
        while epochs > 0 {
            epochs -= 1;
            seconds += u64::from(epoch_seconds);
            // remainder + epoch_remainder < 2 * rate, so at most one carry.
            if remainder >= rate - epoch_remainder {
                remainder -= rate - epoch_remainder;
                seconds += 1;
            } else {
                remainder += epoch_remainder;
            }
        }
        Seconds(seconds)
    }

    /// Convert with a single 64-bit widen-and-divide.
    pub fn to_seconds_widened(&self, ticks_per_second: TicksPerSecond) -> Seconds {
        Seconds::from_ticks(self.total(), ticks_per_second)
    }
}

/// Whole seconds elapsed between `start` and `stop`.
///
/// `stop` must have been captured after `start`. The result is never
/// negative, including when the low word wrapped between the two samples.
pub fn elapsed_seconds(
    start: CounterSample,
    stop: CounterSample,
    ticks_per_second: TicksPerSecond,
) -> Seconds {
    ElapsedTicks::between(start, stop).to_seconds(ticks_per_second)
}

/// [`elapsed_seconds`] for a rate that has not been validated yet.
pub fn elapsed_seconds_raw(
    start: CounterSample,
    stop: CounterSample,
    ticks_per_second: u32,
) -> TimingResult<Seconds> {
    let ticks_per_second = TicksPerSecond::new(ticks_per_second)?;
    Ok(elapsed_seconds(start, stop, ticks_per_second))
}

/// Same result as [`elapsed_seconds`], computed with native 64-bit division.
pub fn elapsed_seconds_widened(
    start: CounterSample,
    stop: CounterSample,
    ticks_per_second: TicksPerSecond,
) -> Seconds {
    ElapsedTicks::between(start, stop).to_seconds_widened(ticks_per_second)
}

/// Converts sample pairs with a rate fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationEstimator {
    ticks_per_second: TicksPerSecond,
}

impl DurationEstimator {
    pub const fn new(ticks_per_second: TicksPerSecond) -> Self {
        Self { ticks_per_second }
    }

    pub fn from_config(config: &TimerConfig) -> TimingResult<Self> {
        Ok(Self::new(config.ticks_per_second()?))
    }

    pub const fn ticks_per_second(&self) -> TicksPerSecond {
        self.ticks_per_second
    }

    pub fn elapsed_ticks(&self, start: CounterSample, stop: CounterSample) -> ElapsedTicks {
        ElapsedTicks::between(start, stop)
    }

    pub fn elapsed_seconds(&self, start: CounterSample, stop: CounterSample) -> Seconds {
        elapsed_seconds(start, stop, self.ticks_per_second)
    }

    /// Elapsed seconds between two atomic reads of a native 64-bit counter.
    pub fn elapsed_seconds_wide(&self, start: u64, stop: u64) -> Seconds {
        Seconds::between_wide(start, stop, self.ticks_per_second)
    }
}
