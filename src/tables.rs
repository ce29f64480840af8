//! Offline-derived linear-approximation tables for [`crate::kernels::fdiv`]
//! and [`crate::kernels::fsqrt`].
//!
//! The slope/intercept formulas are transcendental/rational expressions
//! evaluated in double precision at table-build time, then narrowed to
//! single precision and held in a precomputed 1024-entry array, built
//! eagerly behind a [`std::sync::LazyLock`] the first time either kernel
//! runs, so every caller observes a fully-built table or none at all, never
//! a partially-built one.

use std::sync::LazyLock;

const TABLE_SIZE: usize = 1024;

/// The `(grad, intercept)` pair for one 10-bit sub-interval key `h`, both
/// already narrowed to `f32`.
pub type Coeffs = (f32, f32);

/// Computes the `fdiv` reciprocal-approximation slope and intercept for
/// sub-interval key `h`.
///
/// Evaluated in `f64` and narrowed to `f32` at the end, matching the
/// precision the offline table-build step uses.
#[must_use]
pub fn div_coeffs(h: u32) -> Coeffs {
    let h = f64::from(h);
    let grad = 1024.0 * (1024.0 / (1024.0 + h) - 1024.0 / (1025.0 + h));
    let intercept = 1024.0 * (1.0 - (1024.0 + h) / (1025.0 + h))
        + (768.0 / (1024.0 + h) - 256.0 / (1025.0 + h) + 1024.0 / (2049.0 + 2.0 * h));
    (grad as f32, intercept as f32)
}

/// Computes the `fsqrt` square-root-approximation slope and intercept for
/// sub-interval key `h`.
///
/// `h < 512` selects the `[1,2)` mantissa regime; `h >= 512` selects `[2,4)`.
#[must_use]
pub fn sqrt_coeffs(h: u32) -> Coeffs {
    let hf = f64::from(h);
    if h < 512 {
        let grad = 512.0 * (((513.0 + hf) / 512.0).sqrt() - ((512.0 + hf) / 512.0).sqrt());
        let intercept = (2.0 * ((1025.0 + 2.0 * hf) / 1024.0).sqrt()
            + ((513.0 + hf) / 512.0).sqrt()
            + ((512.0 + hf) / 512.0).sqrt())
            / 4.0
            - ((1025.0 + 2.0 * hf) / 2.0)
                * (((513.0 + hf) / 512.0).sqrt() - ((512.0 + hf) / 512.0).sqrt());
        (grad as f32, intercept as f32)
    } else {
        let grad = 256.0 * (((1.0 + hf) / 256.0).sqrt() - (hf / 256.0).sqrt());
        let intercept = (2.0 * ((1.0 + 2.0 * hf) / 512.0).sqrt()
            + ((1.0 + hf) / 256.0).sqrt()
            + (hf / 256.0).sqrt())
            / 4.0
            - ((1.0 + 2.0 * hf) / 2.0) * (((1.0 + hf) / 256.0).sqrt() - (hf / 256.0).sqrt());
        (grad as f32, intercept as f32)
    }
}

/// Eagerly-built 1024-entry `fdiv` coefficient table, indexed by the 10-bit
/// key `h = slice(m2, 22, 13)`.
pub static DIV_TABLE: LazyLock<[Coeffs; TABLE_SIZE]> = LazyLock::new(|| {
    tracing::debug!("building fdiv coefficient table ({TABLE_SIZE} entries)");
    let mut table = [(0.0f32, 0.0f32); TABLE_SIZE];
    for (h, entry) in table.iter_mut().enumerate() {
        *entry = div_coeffs(h as u32);
    }
    table
});

/// Eagerly-built 1024-entry `fsqrt` coefficient table, indexed by the 10-bit
/// key `h = slice(x, 23, 14) XOR 0x200`.
pub static SQRT_TABLE: LazyLock<[Coeffs; TABLE_SIZE]> = LazyLock::new(|| {
    tracing::debug!("building fsqrt coefficient table ({TABLE_SIZE} entries)");
    let mut table = [(0.0f32, 0.0f32); TABLE_SIZE];
    for (h, entry) in table.iter_mut().enumerate() {
        *entry = sqrt_coeffs(h as u32);
    }
    table
});
