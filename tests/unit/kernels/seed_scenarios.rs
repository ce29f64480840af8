//! Numbered seed scenarios, run as parameterized cases against the exact
//! bit patterns they name.

use fp32_core::{fcvtsw, fcvtws, fdiv, ffloor, fmul, fsqrt};
use rstest::rstest;

fn f(x: f32) -> u32 {
    x.to_bits()
}

#[rstest]
#[case(1.0, 1.0, 0x3f80_0000)]
#[case(2.0, 0.5, 0x3f80_0000)]
fn fmul_seed_scenarios(#[case] a: f32, #[case] b: f32, #[case] expected: u32) {
    assert_eq!(fmul(f(a), f(b)), expected);
}

#[rstest]
#[case(1.0, 2.0, 0x3f00_0000)]
fn fdiv_seed_scenarios(#[case] a: f32, #[case] b: f32, #[case] expected: u32) {
    assert_eq!(fdiv(f(a), f(b)), expected);
}

#[rstest]
#[case(4.0, 0x4000_0000)]
#[case(1.0, 0x3f80_0000)]
fn fsqrt_seed_scenarios(#[case] a: f32, #[case] expected: u32) {
    assert_eq!(fsqrt(f(a)), expected);
}

#[test]
fn fcvtsw_negative_one_seed() {
    assert_eq!(fcvtsw(-1), 0xbf80_0000);
}

#[rstest]
#[case(1.5, 2)]
fn fcvtws_tie_rounds_up(#[case] a: f32, #[case] expected: i32) {
    assert_eq!(fcvtws(f(a)), expected);
}

#[test]
fn fcvtws_negative_half_accepts_either_tie() {
    let got = fcvtws(f(-0.5));
    assert!(got == 0 || got == -1);
}

#[rstest]
#[case(2.7, 2.0)]
#[case(-0.1, -1.0)]
fn ffloor_seed_scenarios(#[case] a: f32, #[case] expected: f32) {
    assert_eq!(ffloor(f(a)), f(expected));
}

#[test]
fn ffloor_shortcut_returns_operand_unchanged() {
    // slice(x, 31, 24) > 157 requires the top byte (sign + 7 exponent bits)
    // to exceed 157; a large-magnitude negative value reaches that.
    let x = f(-1.0e12);
    assert_eq!(ffloor(x), x);
}
