//! Bit-parallel arithmetic on the two trit-planes.
//!
//! Every routine here works on whole 64-bit planes at once. The only loops are
//! over trit positions (bounded by the 64-trit width), never over individual
//! bits inside a combinational step.

use std::cmp::Ordering;

use thiserror::Error;

use crate::ternary::TernaryInt;

/// Errors reported by arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Negate a word (swap its planes).
#[inline]
pub const fn negate(a: &TernaryInt) -> TernaryInt {
    a.neg()
}

/// Single-trit adder applied to all 64 positions simultaneously.
///
/// Returns `(sum, carry)` where `carry` is not yet shifted: a carry at
/// position `i` belongs to position `i + 1`. Only `P + P` (sum N, carry P) and
/// `N + N` (sum P, carry N) produce carries.
#[inline]
pub const fn half_add(a: &TernaryInt, b: &TernaryInt) -> (TernaryInt, TernaryInt) {
    let a_zero = !(a.minus | a.plus);
    let b_zero = !(b.minus | b.plus);

    let minus = (a.plus & b.plus)       // +1 + +1 -> -1, carry +1
        | (a.minus & b_zero)            // -1 +  0
        | (a_zero & b.minus);           //  0 + -1
    let plus = (a.minus & b.minus)      // -1 + -1 -> +1, carry -1
        | (a_zero & b.plus)             //  0 + +1
        | (a.plus & b_zero);            // +1 +  0

    let carry = TernaryInt {
        minus: a.minus & b.minus,
        plus: a.plus & b.plus,
    };

    (TernaryInt { minus, plus }, carry)
}

/// Add two words, returning `(result, overflow)`.
///
/// Carries are fed back through [`half_add`] one position higher per round
/// until none remain; a carry can advance at most 64 times, so the loop is
/// bounded by the width. Carries pushed past position 63 are dropped, and
/// `overflow` reports whether they summed to something non-zero.
pub fn overflowing_add(a: &TernaryInt, b: &TernaryInt) -> (TernaryInt, bool) {
    let (mut sum, mut carry) = half_add(a, b);
    let mut dropped: i32 = 0;

    while carry.minus | carry.plus != 0 {
        dropped += (carry.plus >> 63) as i32 - (carry.minus >> 63) as i32;
        let shifted = TernaryInt {
            minus: carry.minus << 1,
            plus: carry.plus << 1,
        };
        (sum, carry) = half_add(&sum, &shifted);
    }

    if dropped != 0 {
        log::trace!("addition overflowed 64 trits (lost carry {})", dropped);
    }

    (sum, dropped != 0)
}

/// Add two words, silently truncating to 64 trits.
#[inline]
pub fn add(a: &TernaryInt, b: &TernaryInt) -> TernaryInt {
    overflowing_add(a, b).0
}

/// Subtract two words (a - b), silently truncating to 64 trits.
#[inline]
pub fn subtract(a: &TernaryInt, b: &TernaryInt) -> TernaryInt {
    add(a, &b.neg())
}

/// Multiply two words, keeping the low 64 trits of the product.
///
/// Shift-and-add: for every P trit of `b` the current multiplicand is added,
/// for every N trit it is subtracted, and the multiplicand is shifted up one
/// trit (×3) per position.
pub fn multiply(a: &TernaryInt, b: &TernaryInt) -> TernaryInt {
    let mut product = TernaryInt::ZERO;
    let mut multiplicand = *a;
    let mut b_minus = b.minus;
    let mut b_plus = b.plus;

    while (b_minus | b_plus) != 0 && (multiplicand.minus | multiplicand.plus) != 0 {
        if b_plus & 1 == 1 {
            product = add(&product, &multiplicand);
        } else if b_minus & 1 == 1 {
            product = add(&product, &multiplicand.neg());
        }

        multiplicand = shift_left(&multiplicand, 1);
        b_minus >>= 1;
        b_plus >>= 1;
    }

    product
}

/// Divide with remainder, truncating toward zero.
///
/// Restoring long division over magnitudes, entirely on trit-planes. For each
/// shift `i` from the highest one at which `|b|·3^i` still fits down to 0, the
/// shifted divisor is subtracted from the running remainder while it fits and
/// 3^i is added to the quotient each time. Since the remainder entering step
/// `i` is below `|b|·3^(i+1)`, that happens at most twice per step.
///
/// The quotient is negative when exactly one operand is; the remainder takes
/// the sign of the dividend.
pub fn divmod(a: &TernaryInt, b: &TernaryInt) -> Result<(TernaryInt, TernaryInt), ArithError> {
    if b.is_zero() {
        log::debug!("rejected division of {} by zero", a.to_i128());
        return Err(ArithError::DivisionByZero);
    }

    let negative_quotient = a.is_negative() ^ b.is_negative();
    let divisor = b.abs();
    let mut remainder = a.abs();
    let mut quotient = TernaryInt::ZERO;

    let headroom = (divisor.minus ^ divisor.plus).leading_zeros();
    for i in (0..=headroom).rev() {
        let step = shift_left(&divisor, i);
        let weight = shift_left(&TernaryInt::ONE, i);
        while compare(&remainder, &step) != Ordering::Less {
            remainder = subtract(&remainder, &step);
            quotient = add(&quotient, &weight);
        }
    }

    if negative_quotient {
        quotient = quotient.neg();
    }
    if a.is_negative() {
        remainder = remainder.neg();
    }

    Ok((quotient, remainder))
}

/// Shift a word left by n trit positions (multiply by 3^n).
/// Fills vacated positions with zeros. Trits shifted out are lost.
#[inline]
pub const fn shift_left(a: &TernaryInt, n: u32) -> TernaryInt {
    if n >= TernaryInt::WIDTH {
        return TernaryInt::ZERO;
    }
    TernaryInt {
        minus: a.minus << n,
        plus: a.plus << n,
    }
}

/// Shift a word right by n trit positions, zero-filling from the top.
///
/// This is the plane shift itself; trits shifted out are dropped.
#[inline]
pub const fn shift_right(a: &TernaryInt, n: u32) -> TernaryInt {
    if n >= TernaryInt::WIDTH {
        return TernaryInt::ZERO;
    }
    TernaryInt {
        minus: a.minus >> n,
        plus: a.plus >> n,
    }
}

/// Compare two words, returning their relationship.
///
/// The highest position whose decoded trits differ decides; an invalid `11`
/// position decodes as zero.
pub fn compare(a: &TernaryInt, b: &TernaryInt) -> Ordering {
    let (a_minus, a_plus) = a.normalized();
    let (b_minus, b_plus) = b.normalized();

    let differ = (a_minus ^ b_minus) | (a_plus ^ b_plus);
    if differ == 0 {
        return Ordering::Equal;
    }

    let top = 63 - differ.leading_zeros();
    let a_trit = ((a_plus >> top) & 1) as i8 - ((a_minus >> top) & 1) as i8;
    let b_trit = ((b_plus >> top) & 1) as i8 - ((b_minus >> top) & 1) as i8;
    a_trit.cmp(&b_trit)
}
