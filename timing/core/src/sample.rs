// Licensed under the Apache-2.0 license

/// One capture of a split cycle counter.
///
/// `low` is the low 32 bits of the logically wider counter and `high` is the
/// separately read epoch word that advances once per `low` wraparound. The
/// two halves are read one after the other, so a sample taken across a
/// wraparound can be off by one epoch. Only that single-epoch case is
/// reconciled when two samples are compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSample {
    pub low: u32,
    pub high: u32,
}

impl CounterSample {
    pub const ZERO: CounterSample = CounterSample { low: 0, high: 0 };

    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Split a full-width counter read into its two halves.
    pub const fn from_u64(value: u64) -> Self {
        Self {
            low: value as u32,
            high: (value >> 32) as u32,
        }
    }

    /// Recombine the halves. Only meaningful when the sample was read
    /// atomically.
    pub const fn as_u64(&self) -> u64 {
        (self.high as u64) << 32 | self.low as u64
    }
}

impl From<u64> for CounterSample {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
