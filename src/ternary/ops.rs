//! Tritwise operations trait.
//!
//! Defines the ternary logic operations shared by single trits and whole
//! words. On [`TernaryInt`] every operation is a plane-level boolean
//! expression covering all 64 positions at once.

use crate::ternary::{TernaryInt, Trit};

/// Trait for types that support tritwise operations.
pub trait TritOps {
    /// The output type for operations that return a value of the same size.
    type Output;

    /// Negate all trits (flip N ↔ P).
    fn ternary_neg(&self) -> Self::Output;

    /// Tritwise minimum (ternary AND).
    fn ternary_min(&self, other: &Self) -> Self::Output;

    /// Tritwise maximum (ternary OR).
    fn ternary_max(&self, other: &Self) -> Self::Output;

    /// Tritwise consensus.
    fn ternary_consensus(&self, other: &Self) -> Self::Output;
}

impl TritOps for Trit {
    type Output = Trit;

    #[inline]
    fn ternary_neg(&self) -> Trit {
        self.neg()
    }

    #[inline]
    fn ternary_min(&self, other: &Self) -> Trit {
        Trit::min(*self, *other)
    }

    #[inline]
    fn ternary_max(&self, other: &Self) -> Trit {
        Trit::max(*self, *other)
    }

    #[inline]
    fn ternary_consensus(&self, other: &Self) -> Trit {
        self.consensus(*other)
    }
}

impl TritOps for TernaryInt {
    type Output = Self;

    #[inline]
    fn ternary_neg(&self) -> Self {
        self.neg()
    }

    /// N wins anywhere either side is N; P only where both are P.
    #[inline]
    fn ternary_min(&self, other: &Self) -> Self {
        TernaryInt::from_planes(self.minus | other.minus, self.plus & other.plus)
    }

    /// P wins anywhere either side is P; N only where both are N.
    #[inline]
    fn ternary_max(&self, other: &Self) -> Self {
        TernaryInt::from_planes(self.minus & other.minus, self.plus | other.plus)
    }

    #[inline]
    fn ternary_consensus(&self, other: &Self) -> Self {
        TernaryInt::from_planes(self.minus & other.minus, self.plus & other.plus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_tritwise(a: TernaryInt, b: TernaryInt) {
        let min = a.ternary_min(&b);
        let max = a.ternary_max(&b);
        let consensus = a.ternary_consensus(&b);
        for i in 0..64 {
            assert_eq!(min.trit(i), a.trit(i).min(b.trit(i)));
            assert_eq!(max.trit(i), a.trit(i).max(b.trit(i)));
            assert_eq!(consensus.trit(i), a.trit(i).consensus(b.trit(i)));
        }
        assert!(min.is_valid() && max.is_valid() && consensus.is_valid());
    }

    #[test]
    fn test_tritwise_matches_single_trits() {
        check_tritwise(TernaryInt::from_i64(42), TernaryInt::from_i64(-10));
        check_tritwise(TernaryInt::from_i64(12_345), TernaryInt::from_i64(-6_789));
        check_tritwise(TernaryInt::MAX, TernaryInt::MIN);
    }

    #[test]
    fn test_min_max_duality() {
        let a = TernaryInt::from_i64(987_654_321);
        let b = TernaryInt::from_i64(-123_456_789);
        assert_eq!(
            a.ternary_min(&b).ternary_neg(),
            a.ternary_neg().ternary_max(&b.ternary_neg())
        );
    }

    #[test]
    fn test_trit_impl() {
        assert_eq!(Trit::P.ternary_min(&Trit::N), Trit::N);
        assert_eq!(Trit::P.ternary_max(&Trit::O), Trit::P);
        assert_eq!(Trit::N.ternary_consensus(&Trit::N), Trit::N);
        assert_eq!(Trit::N.ternary_neg(), Trit::P);
    }
}
