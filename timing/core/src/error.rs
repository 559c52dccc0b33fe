// Licensed under the Apache-2.0 license

use thiserror_no_std::Error;

/// Errors raised while building a timer configuration.
///
/// The conversion itself never fails; every variant here describes a bad
/// configuration constant and is reported once, where the constant is defined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// The counter rate is zero ticks per second.
    #[error("ticks per second must be non-zero")]
    ZeroTicksPerSecond,
    /// The timer resolution divider is zero.
    #[error("timer resolution divider must be non-zero")]
    ZeroResolutionDivider,
    /// The divider truncates the clock rate down to zero ticks per second.
    #[error("resolution divider {divider} exceeds clock rate {clock_hz} Hz")]
    DividerExceedsClock { clock_hz: u32, divider: u32 },
}

/// Result type for timer configuration
pub type TimingResult<T> = core::result::Result<T, TimingError>;
