//! Bit-range extraction and float-image construction.
//!
//! These two helpers are the only surface shared by every kernel in
//! [`crate::kernels`]: each kernel decomposes its operands with [`slice`]
//! and reassembles its result with [`mkfloat`].

/// The canonical 32-bit representation every kernel consumes and produces.
///
/// A `Word` is reinterpreted as a binary32 float, a two's-complement signed
/// integer, or a raw bit pattern depending on which kernel is looking at it;
/// the type itself carries no tag.
pub type Word = u32;

/// Extracts the inclusive bit range `[hi..lo]` of `x`, zero-extended into the
/// low bits of the result.
///
/// # Panics
///
/// Panics (via the `hi - lo` subtraction) if `hi < lo`, or if `hi > 31`.
/// Callers within this crate only ever pass bit positions of a 32-bit word,
/// so these are programmer errors, not runtime conditions.
#[inline]
#[must_use]
pub const fn slice(x: Word, hi: u32, lo: u32) -> Word {
    // hi == 31, lo == 0 would require a `1u32 << 32` to build the mask,
    // which overflows the shift width — handled as a direct pass-through.
    if hi == 31 && lo == 0 {
        return x;
    }
    let width = hi - lo + 1;
    (x >> lo) & ((1u32 << width) - 1)
}

/// Composes a binary32 bit pattern from its sign, biased exponent, and
/// mantissa fields.
///
/// Callers must ensure `s ∈ {0,1}`, `e ∈ [0,255]`, and `m ∈ [0, 2^23)`; the
/// fields are disjoint bit ranges so `+` and `|` are equivalent here, but `|`
/// is used to make the disjointness visible at the call site.
#[inline]
#[must_use]
pub const fn mkfloat(s: Word, e: Word, m: Word) -> Word {
    (s << 31) | (e << 23) | m
}

/// The sign bit (bit 31) of a `Word` viewed as binary32.
#[inline]
#[must_use]
pub const fn sign_of(x: Word) -> Word {
    slice(x, 31, 31)
}

/// The 8-bit biased exponent (bits 30..23) of a `Word` viewed as binary32.
#[inline]
#[must_use]
pub const fn exp_of(x: Word) -> Word {
    slice(x, 30, 23)
}

/// The 23-bit mantissa field (bits 22..0) of a `Word` viewed as binary32.
#[inline]
#[must_use]
pub const fn mant_of(x: Word) -> Word {
    slice(x, 22, 0)
}
