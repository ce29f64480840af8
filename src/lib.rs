//! Behavioral reference model of a binary32 arithmetic unit.
//!
//! This crate models the five arithmetic kernels ([`kernels::fmul`],
//! [`kernels::fdiv`], [`kernels::fsqrt`], [`kernels::fcvtsw`],
//! [`kernels::fcvtws`], [`kernels::ffloor`]) a hardware FPU exposes,
//! implemented over fixed-width integer arithmetic so the results match what
//! an RTL co-simulation oracle expects bit-for-bit, rather than what the
//! host's native float unit would produce. Every kernel is a pure function
//! over 32-bit [`bits::Word`] bit patterns built from [`bits::slice`] and
//! [`bits::mkfloat`]; none carries state or an error channel.
//!
//! [`trace`] and [`error`] support the one ambient, fallible concern in this
//! crate: reading and writing the ASCII trace rows hardware co-simulation
//! harnesses exchange with this model.

pub mod bits;
pub mod error;
pub mod kernels;
pub mod tables;
pub mod trace;

pub use bits::{Word, mkfloat, slice};
pub use kernels::{fcvtsw, fcvtws, fdiv, ffloor, fmul, fsqrt};
