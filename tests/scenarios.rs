//! End-to-end scenarios through the public API.

use ternaryint::{ArithError, ConvertError, TernaryInt, Trit};

fn t(value: i64) -> TernaryInt {
    TernaryInt::from(value)
}

#[test]
fn large_addition_and_subtraction() {
    let a = t(57_934_588_798_797);
    let b = t(-32_432_408_797_923);

    assert_eq!((a + b).to_i64(), 57_934_588_798_797 + -32_432_408_797_923);
    assert_eq!((a - b).to_i64(), 57_934_588_798_797 - -32_432_408_797_923);
    assert_eq!((-b).to_i64(), 32_432_408_797_923);
}

#[test]
fn multiplication_by_negative() {
    assert_eq!((t(12_345_679) * t(-8)).to_i64(), -98_765_432);
}

#[test]
fn truncating_division_all_sign_combinations() {
    let cases = [
        (1003, 5, 200, 3),
        (-1003, 5, -200, -3),
        (-1003, -5, 200, -3),
        (1003, -5, -200, 3),
    ];
    for (a, b, q, r) in cases {
        let (quotient, remainder) = t(a).divmod(&t(b)).unwrap();
        assert_eq!(quotient.to_i64(), q, "{} / {}", a, b);
        assert_eq!(remainder.to_i64(), r, "{} % {}", a, b);
        assert_eq!((t(a) / t(b)).to_i64(), q);
        assert_eq!((t(a) % t(b)).to_i64(), r);
    }
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(t(42).divmod(&TernaryInt::ZERO), Err(ArithError::DivisionByZero));
    assert_eq!(t(42).checked_div(&TernaryInt::ZERO), None);
    assert_eq!(t(42).checked_rem(&TernaryInt::ZERO), None);
    assert_eq!(t(42).checked_rem(&t(5)), Some(t(2)));
}

#[test]
fn comparison_and_shifts() {
    let mut a = t(-11);
    let mut b = t(-12);
    assert!(a >= b);

    a <<= 3u32;
    assert_eq!(a.to_i64(), -297);

    b >>= 2u32;
    assert_eq!(b.to_i64(), -1);
}

#[test]
fn formatted_strings_round_trip() {
    for v in [0i64, 1, -1, 8, -98_765_432, i64::MAX, i64::MIN] {
        let text = t(v).to_string();
        assert_eq!(text.len(), 64);
        assert!(text.chars().all(|c| matches!(c, '-' | '0' | '+')));
        assert_eq!(text.parse::<TernaryInt>().unwrap().to_i64(), v);
    }
}

#[test]
fn out_of_range_conversion_is_explicit() {
    let beyond = t(i64::MAX) + TernaryInt::ONE;
    assert_eq!(beyond.to_i128(), i64::MAX as i128 + 1);
    assert!(matches!(i64::try_from(beyond), Err(ConvertError::OutOfRange { .. })));
}

#[test]
fn trit_level_construction() {
    let mut trits = [Trit::O; 64];
    trits[0] = Trit::P;
    trits[1] = Trit::N;
    trits[2] = Trit::P;
    // 9 - 3 + 1
    assert_eq!(TernaryInt::from_trits(trits).to_i64(), 7);
    assert_eq!(TernaryInt::from(Trit::N).to_i64(), -1);
}
