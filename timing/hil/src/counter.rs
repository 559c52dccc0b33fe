/*++

Licensed under the Apache-2.0 license.

File Name:

    counter.rs

Abstract:

    Hardware Interface Layer trait for free-running cycle counters.
--*/

use bench_timing::CounterSample;

// Hardware Interface Layer trait for cycle counters
//
// Provides snapshots of a free-running counter that is exposed as a low and
// a high 32-bit word. Implementations read the two words back to back and
// must not retry to make the pair consistent.
pub trait CycleCounter {
    // Capture the current counter value
    //
    // Called once right before the timed region starts and once right after
    // it ends.
    //
    // # Returns
    // A fresh low/high sample of the counter.
    fn capture_sample(&self) -> CounterSample;

    // Capture the full-width counter in a single read
    //
    // Counters that expose the whole value atomically (e.g. `mcycle` on
    // RV64) override this. Elapsed time between two wide reads is a plain
    // 64-bit difference and skips the split-word reconciliation.
    //
    // # Returns
    // The counter value, or `None` when only split reads are available.
    fn capture_wide(&self) -> Option<u64> {
        None
    }
}

impl<T: CycleCounter + ?Sized> CycleCounter for &T {
    fn capture_sample(&self) -> CounterSample {
        (**self).capture_sample()
    }

    fn capture_wide(&self) -> Option<u64> {
        (**self).capture_wide()
    }
}
