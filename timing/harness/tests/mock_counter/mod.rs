// Licensed under the Apache-2.0 license

use bench_timing::CounterSample;
use bench_timing_hil::CycleCounter;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Counter that replays a fixed list of samples.
pub struct MockCounter {
    samples: RefCell<VecDeque<CounterSample>>,
    captures: RefCell<usize>,
    wide: bool,
}

impl MockCounter {
    /// Counter with only split (low/high) reads.
    pub fn new(samples: &[CounterSample]) -> Self {
        Self {
            samples: RefCell::new(samples.iter().copied().collect()),
            captures: RefCell::new(0),
            wide: false,
        }
    }

    /// Counter read atomically at full width.
    pub fn wide(values: &[u64]) -> Self {
        Self {
            samples: RefCell::new(values.iter().copied().map(CounterSample::from_u64).collect()),
            captures: RefCell::new(0),
            wide: true,
        }
    }

    pub fn captures(&self) -> usize {
        *self.captures.borrow()
    }

    pub fn remaining(&self) -> usize {
        self.samples.borrow().len()
    }

    fn next(&self) -> CounterSample {
        *self.captures.borrow_mut() += 1;
        self.samples
            .borrow_mut()
            .pop_front()
            .expect("mock counter ran out of samples")
    }
}

impl CycleCounter for MockCounter {
    fn capture_sample(&self) -> CounterSample {
        self.next()
    }

    fn capture_wide(&self) -> Option<u64> {
        self.wide.then(|| self.next().as_u64())
    }
}
