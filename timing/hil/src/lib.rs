/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Hardware Interface Layer (HIL) for benchmark cycle counters.
--*/

#![no_std]

pub mod counter;

pub use counter::CycleCounter;
