/*++

Licensed under the Apache-2.0 license.

File Name:

    config.rs

Abstract:

    Counter rate configuration.

--*/

use crate::error::{TimingError, TimingResult};
use core::num::NonZeroU32;

/// Cycle counter clock rate of the emulator, in Hz. The emulator advances
/// `mcycle` once per retired instruction and models a 1 MHz core.
pub const EMULATOR_CPU_CLOCK_HZ: u32 = 1_000_000;

/// Counter frequency used as the divisor when converting ticks to seconds.
///
/// Always non-zero. Built once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicksPerSecond(NonZeroU32);

impl TicksPerSecond {
    pub fn new(ticks_per_second: u32) -> TimingResult<Self> {
        NonZeroU32::new(ticks_per_second)
            .map(Self)
            .ok_or(TimingError::ZeroTicksPerSecond)
    }

    /// Build a rate in a `const` context. A zero rate fails to compile there.
    pub const fn new_const(ticks_per_second: u32) -> Self {
        match NonZeroU32::new(ticks_per_second) {
            Some(rate) => Self(rate),
            None => panic!("ticks per second must be non-zero"),
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for TicksPerSecond {
    fn from(rate: NonZeroU32) -> Self {
        Self(rate)
    }
}

impl TryFrom<u32> for TicksPerSecond {
    type Error = TimingError;

    fn try_from(ticks_per_second: u32) -> TimingResult<Self> {
        Self::new(ticks_per_second)
    }
}

/// Build/boot time timer configuration.
///
/// `resolution_divider` trades counter resolution for the span that can be
/// measured: the effective rate is `clock_hz / resolution_divider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub clock_hz: u32,
    pub resolution_divider: u32,
}

impl TimerConfig {
    pub const DEFAULT: TimerConfig = TimerConfig::new(EMULATOR_CPU_CLOCK_HZ, 1);

    pub const fn new(clock_hz: u32, resolution_divider: u32) -> Self {
        Self {
            clock_hz,
            resolution_divider,
        }
    }

    pub fn ticks_per_second(&self) -> TimingResult<TicksPerSecond> {
        if self.resolution_divider == 0 {
            return Err(TimingError::ZeroResolutionDivider);
        }
        if self.clock_hz == 0 {
            return Err(TimingError::ZeroTicksPerSecond);
        }
        match self.clock_hz / self.resolution_divider {
            0 => Err(TimingError::DividerExceedsClock {
                clock_hz: self.clock_hz,
                divider: self.resolution_divider,
            }),
            rate => TicksPerSecond::new(rate),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
