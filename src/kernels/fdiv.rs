//! Division.

use crate::bits::{Word, exp_of, mant_of, mkfloat, sign_of, slice};
use crate::kernels::fmul::fmul;
use crate::tables::DIV_TABLE;

/// Divides `x1` by `x2` via a linear-approximation reciprocal of the divisor
/// mantissa, then one [`fmul`].
///
/// As with [`fmul`], operands whose exponent is 0 or 255, or a true quotient
/// whose biased exponent falls outside `[1,253]`, fall outside the accuracy
/// contract; the bit pattern is still well-defined by the formula
/// below.
#[must_use]
pub fn fdiv(x1: Word, x2: Word) -> Word {
    let (s1, e1, m1) = (sign_of(x1), exp_of(x1), mant_of(x1));
    let (s2, e2, m2) = (sign_of(x2), exp_of(x2), mant_of(x2));

    // Both operands' mantissas normalized into [1,2) so the reciprocal
    // approximation only ever has to cover a single sub-interval table.
    let m1n = mkfloat(0, 127, m1);
    let m2n = mkfloat(0, 127, m2);

    // Top 10 bits of the 23-bit mantissa field: m2 has no bit 23, so using
    // that as the high end of the slice would always read 0 there and only
    // ever address the table's lower half.
    let h = slice(m2, 22, 13);
    let (grad, intercept) = DIV_TABLE[h as usize];

    let m2_inv = intercept - f32::from_bits(fmul(grad.to_bits(), m2n));
    let mdiv = fmul(m1n, m2_inv.to_bits());

    // mdiv is itself a normalized float word: its own exponent already
    // reflects whether the quotient mantissa landed below 1.0 (an even
    // exponent, [0.5,1)) or at/above it (odd, [1,2)). ovf guards the
    // symmetric overflow case, kept for fidelity even though the
    // reciprocal's range keeps it at 0 in practice.
    let ovf = slice(mdiv, 31, 31);
    let udf = 1 - slice(mdiv, 23, 23);

    let raw = (e1 as i32) - (e2 as i32) + 127 - (udf as i32) + (ovf as i32);
    let ey = (raw as u32) & 0xff;
    let my = mant_of(mdiv);
    let sy = s1 ^ s2;

    mkfloat(sy, ey, my)
}
