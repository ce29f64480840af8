//! Square root.

use crate::bits::{Word, exp_of, mant_of, mkfloat, sign_of, slice};
use crate::kernels::fmul::fmul;
use crate::tables::SQRT_TABLE;

/// Computes `sqrt(x)` via a two-segment linear approximation keyed on
/// exponent parity, then one [`fmul`].
///
/// Defined only for `s = 0`; a negative operand is outside the
/// accuracy contract and its output bit pattern is unspecified.
#[must_use]
pub fn fsqrt(x: Word) -> Word {
    let s = sign_of(x);
    let e = exp_of(x);
    let m = mant_of(x);

    // sqrt halves the exponent, so the mantissa must be normalized
    // differently depending on whether that halving has a remainder.
    let mn = if e & 1 == 1 {
        mkfloat(0, 127, m)
    } else {
        mkfloat(0, 128, m)
    };

    // Bit 9 of this 10-bit key must land on x's own exponent-parity bit
    // (bit 23, the same bit `e & 1` reads above) so the XOR selects the
    // regime `mn` was actually normalized into; one bit higher picks up the
    // wrong exponent bit and can select the opposite regime's segment.
    let h = slice(x, 23, 14) ^ 0x200;
    let (grad, intercept) = SQRT_TABLE[h as usize];

    let msqrt = intercept + f32::from_bits(fmul(grad.to_bits(), mn));
    let msqrt_bits = msqrt.to_bits();

    // msqrt is a plain normalized float in [1,2) (sqrt of mn, which itself
    // sits in [1,4)), not a doubled-width fmul product, so its mantissa is
    // read off directly rather than shifted the way a raw product would be.
    let my = mant_of(msqrt_bits);
    // Arithmetic shift, not `/2`: the unbiased exponent can be negative, and
    // halving a negative exponent must floor (round toward -infinity), not
    // truncate toward zero.
    let ey = if e == 0 || e == 255 {
        0
    } else {
        (((e.wrapping_sub(127) as i32) >> 1) + 127) as Word
    };

    mkfloat(s, ey, my)
}
