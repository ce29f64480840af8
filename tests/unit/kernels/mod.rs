//! Integration coverage for [`fp32_core::kernels`] beyond the per-file unit
//! tests already living next to each kernel.

/// The numbered seed scenarios enumerated by the testable-properties design
/// notes, run as parameterized cases.
pub mod seed_scenarios;
