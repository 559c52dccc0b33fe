/*++

Licensed under the Apache-2.0 license.

File Name:

    mcycle.rs

Abstract:

    Cycle counter driver for the benchmark harness.

    Implements the CycleCounter HIL trait using the RISC-V mcycle and
    mcycleh CSRs.

--*/

use bench_timing::CounterSample;
use bench_timing_hil::CycleCounter;

/// Cycle counter driver.
///
/// On RV32 the high and low halves are two separate CSR reads. They are read
/// high first, then low, without a consistency retry loop; the conversion
/// side reconciles a single wraparound between the two reads. On RV64 the
/// whole counter is one read and is reported through `capture_wide`.
///
/// The counter rate is not a property of the driver. It comes from the
/// `TimerConfig` the `DurationEstimator` is built from.
#[derive(Debug, Default, Clone, Copy)]
pub struct McycleCounter;

impl McycleCounter {
    pub const fn new() -> Self {
        Self
    }
}

/// Reads `mcycleh` then `mcycle`.
#[cfg(target_arch = "riscv32")]
fn read_mcycle() -> CounterSample {
    use riscv_csr::csr::{ReadWriteRiscvCsr, MCYCLE, MCYCLEH};
    use tock_registers::interfaces::Readable;
    use tock_registers::register_bitfields;
    register_bitfields![usize,
        value [
            value OFFSET(0) NUMBITS(32) [],
        ],
    ];
    let mcycleh: ReadWriteRiscvCsr<usize, value::Register, { MCYCLEH }> =
        ReadWriteRiscvCsr::new();
    let mcycle: ReadWriteRiscvCsr<usize, value::Register, { MCYCLE }> =
        ReadWriteRiscvCsr::new();
    let high = mcycleh.get() as u32;
    let low = mcycle.get() as u32;
    CounterSample::new(low, high)
}

/// RV64 exposes the whole counter in a single CSR read.
#[cfg(target_arch = "riscv64")]
fn read_mcycle_wide() -> u64 {
    use riscv_csr::csr::{ReadWriteRiscvCsr, MCYCLE};
    use tock_registers::interfaces::Readable;
    use tock_registers::register_bitfields;
    register_bitfields![usize,
        value [
            value OFFSET(0) NUMBITS(64) [],
        ],
    ];
    let mcycle: ReadWriteRiscvCsr<usize, value::Register, { MCYCLE }> =
        ReadWriteRiscvCsr::new();
    mcycle.get() as u64
}

#[cfg(target_arch = "riscv64")]
fn read_mcycle() -> CounterSample {
    CounterSample::from_u64(read_mcycle_wide())
}

/// Placeholder for non-RISC-V targets.
#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
fn read_mcycle() -> CounterSample {
    CounterSample::ZERO
}

impl CycleCounter for McycleCounter {
    fn capture_sample(&self) -> CounterSample {
        read_mcycle()
    }

    #[cfg(target_arch = "riscv64")]
    fn capture_wide(&self) -> Option<u64> {
        Some(read_mcycle_wide())
    }
}
