/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Start/stop bracket around a benchmarked workload.

    Samples are returned by value instead of being kept in process-wide
    timer state: capture start, run the workload, capture stop, convert.

--*/

#![no_std]

pub mod measurement;
pub mod stopwatch;

pub use measurement::{Capture, Measurement};
pub use stopwatch::{run_timed, Stopwatch};
