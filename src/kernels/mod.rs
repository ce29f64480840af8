//! The five arithmetic kernels of the binary32 arithmetic unit.
//!
//! Each kernel is a pure function over [`Word`](crate::bits::Word) bit
//! patterns, built from [`crate::bits::slice`]/[`crate::bits::mkfloat`] and
//! fixed-width integer arithmetic only — no kernel leans on the host's
//! native float multiply or divide to compute a result mantissa.
//! The one recursive exception is `fmul` itself: `fdiv` and `fsqrt` route
//! their mantissa products back through [`fmul`], never through `f32 *`.
//!
//! Kernels are organized one per file, each owning one self-contained
//! concern:
//!
//! - [`fmul`]: multiplication by 24×24 mantissa multiplication, decomposed
//!   into 12-bit halves.
//! - [`fdiv`]: division via a linear-approximation reciprocal, then one
//!   `fmul`.
//! - [`fsqrt`]: square root via a two-segment linear approximation keyed on
//!   exponent parity.
//! - [`fcvtsw`]: signed 32-bit integer to float.
//! - [`fcvtws`]: float to signed 32-bit integer.
//! - [`ffloor`]: floor via round-trip through `fcvtws`/`fcvtsw`.

mod fcvtsw;
mod fcvtws;
mod fdiv;
mod ffloor;
mod fmul;
mod fsqrt;

pub use fcvtsw::fcvtsw;
pub use fcvtws::fcvtws;
pub use fdiv::fdiv;
pub use ffloor::ffloor;
pub use fmul::fmul;
pub use fsqrt::fsqrt;
