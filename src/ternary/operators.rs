//! Operator overloads for [`TernaryInt`].
//!
//! Each binary operator comes with its compound-assignment form. Arithmetic
//! truncates to 64 trits like the named functions in [`arith`]; `/` and `%`
//! panic on a zero divisor, as the primitive integer operators do. Use
//! [`TernaryInt::divmod`] or the `checked_*` methods to handle that case.

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::ternary::{arith, TernaryInt};

impl Neg for TernaryInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        TernaryInt::neg(&self)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl $trait for TernaryInt {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $op(&self, &rhs)
            }
        }

        impl $assign_trait for TernaryInt {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op(self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, arith::add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, arith::subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, arith::multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, quotient_or_panic);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, remainder_or_panic);

fn quotient_or_panic(a: &TernaryInt, b: &TernaryInt) -> TernaryInt {
    match arith::divmod(a, b) {
        Ok((quotient, _)) => quotient,
        Err(e) => panic!("attempt to divide {:?}: {}", a, e),
    }
}

fn remainder_or_panic(a: &TernaryInt, b: &TernaryInt) -> TernaryInt {
    match arith::divmod(a, b) {
        Ok((_, remainder)) => remainder,
        Err(e) => panic!("attempt to calculate the remainder of {:?}: {}", a, e),
    }
}

macro_rules! impl_shift_ops {
    ($($count:ty),*) => {
        $(
            impl Shl<$count> for TernaryInt {
                type Output = Self;

                #[inline]
                fn shl(self, count: $count) -> Self {
                    arith::shift_left(&self, u32::try_from(count).unwrap_or(u32::MAX))
                }
            }

            impl ShlAssign<$count> for TernaryInt {
                #[inline]
                fn shl_assign(&mut self, count: $count) {
                    *self = *self << count;
                }
            }

            impl Shr<$count> for TernaryInt {
                type Output = Self;

                #[inline]
                fn shr(self, count: $count) -> Self {
                    arith::shift_right(&self, u32::try_from(count).unwrap_or(u32::MAX))
                }
            }

            impl ShrAssign<$count> for TernaryInt {
                #[inline]
                fn shr_assign(&mut self, count: $count) {
                    *self = *self >> count;
                }
            }
        )*
    };
}

impl_shift_ops!(u32, usize);

impl Sum for TernaryInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TernaryInt::ZERO, |acc, x| acc + x)
    }
}

impl Product for TernaryInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TernaryInt::ONE, |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: i64) -> TernaryInt {
        TernaryInt::from(value)
    }

    #[test]
    fn test_binary_operators() {
        let a = t(57_934_588_798_797);
        let b = t(-32_432_408_797_923);
        assert_eq!((a + b).to_i64(), 25_502_180_000_874);
        assert_eq!((a - b).to_i64(), 90_366_997_596_720);
        assert_eq!((-b).to_i64(), 32_432_408_797_923);
        assert_eq!((t(12_345_679) * t(-8)).to_i64(), -98_765_432);
        assert_eq!((t(1003) / t(-5)).to_i64(), -200);
        assert_eq!((t(1003) % t(-5)).to_i64(), 3);
    }

    #[test]
    fn test_compound_operators() {
        let mut x = t(10);
        x += t(5);
        assert_eq!(x.to_i64(), 15);
        x -= t(20);
        assert_eq!(x.to_i64(), -5);
        x *= t(-7);
        assert_eq!(x.to_i64(), 35);
        x /= t(4);
        assert_eq!(x.to_i64(), 8);
        x %= t(3);
        assert_eq!(x.to_i64(), 2);
    }

    #[test]
    fn test_shift_operators() {
        let mut a = t(-11);
        a <<= 3u32;
        assert_eq!(a.to_i64(), -297);

        let mut b = t(-12);
        b >>= 2usize;
        // -12 = "--0", two trits down leaves "-"
        assert_eq!(b.to_i64(), -1);

        assert_eq!(t(5) << 0u32, t(5));
        assert!((t(5) << usize::MAX).is_zero());
    }

    #[test]
    fn test_relational_operators() {
        let a = t(-11);
        let b = t(-12);
        assert!(a >= b);
        assert!(a > b);
        assert!(b < a);
        assert!(b <= a);
        assert!(a != b);
        assert!(a == t(-11));
    }

    #[test]
    fn test_sum_and_product() {
        let total: TernaryInt = (1..=10).map(t).sum();
        assert_eq!(total.to_i64(), 55);

        let factorial: TernaryInt = (1..=20).map(t).product();
        assert_eq!(factorial.to_i64(), 2_432_902_008_176_640_000);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = t(1) / TernaryInt::ZERO;
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rem_by_zero_panics() {
        let _ = t(1) % TernaryInt::ZERO;
    }
}
