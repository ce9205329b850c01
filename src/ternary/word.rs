//! Fixed-width 64-trit balanced ternary integer.
//!
//! A [`TernaryInt`] stores its trits in two bit-planes: bit `i` of `minus`
//! marks trit `i` as -1 and bit `i` of `plus` marks it as +1. Position `i`
//! carries place value 3^i. Both bits set (the `11` code) is invalid; no
//! operation in this crate produces it, but [`TernaryInt::from_planes`]
//! does not reject it either.
//!
//! # Range
//!
//! 64 trits hold every integer in ±(3^64 − 1)/2, which always fits in an
//! `i128`. Conversions to `i64` are exact for in-range values and wrap
//! (two's complement truncation) otherwise; use `i64::try_from` for a checked
//! conversion. Arithmetic that leaves the 64-trit range silently truncates to
//! the low 64 trits.

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::ternary::{arith, Trit};

/// A 64-trit balanced ternary integer.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
pub struct TernaryInt {
    pub(crate) minus: u64,
    pub(crate) plus: u64,
}

impl TernaryInt {
    /// Number of trits in a TernaryInt.
    pub const WIDTH: u32 = 64;

    /// Zero (all trits O).
    pub const ZERO: Self = Self { minus: 0, plus: 0 };

    /// One.
    pub const ONE: Self = Self { minus: 0, plus: 1 };

    /// Largest value: every trit P, (3^64 − 1)/2.
    pub const MAX: Self = Self { minus: 0, plus: u64::MAX };

    /// Smallest value: every trit N, −(3^64 − 1)/2.
    pub const MIN: Self = Self { minus: u64::MAX, plus: 0 };

    /// Build from raw planes without validation.
    #[inline]
    pub const fn from_planes(minus: u64, plus: u64) -> Self {
        Self { minus, plus }
    }

    /// Build from raw planes, rejecting positions that set both bits.
    pub fn try_from_planes(minus: u64, plus: u64) -> Result<Self, ConvertError> {
        let overlap = minus & plus;
        if overlap != 0 {
            return Err(ConvertError::InvalidEncoding { overlap });
        }
        Ok(Self { minus, plus })
    }

    /// The minus-plane.
    #[inline]
    pub const fn minus(&self) -> u64 {
        self.minus
    }

    /// The plus-plane.
    #[inline]
    pub const fn plus(&self) -> u64 {
        self.plus
    }

    /// True when no position uses the forbidden `11` code.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.minus & self.plus == 0
    }

    /// Create from a decimal integer. Every `i64` fits exactly.
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_i128(value as i128)
    }

    /// Create from a decimal integer.
    ///
    /// Repeatedly extracts a balanced digit from the Euclidean remainder
    /// (remainder 2 becomes -1 with a borrow into the next position). Values
    /// beyond ±(3^64 − 1)/2 keep only their low 64 trits.
    pub const fn from_i128(mut value: i128) -> Self {
        let mut minus = 0u64;
        let mut plus = 0u64;
        let mut position = 0;

        while value != 0 && position < Self::WIDTH {
            let quotient = value.div_euclid(3);
            match value.rem_euclid(3) {
                1 => {
                    plus |= 1 << position;
                    value = quotient;
                }
                2 => {
                    minus |= 1 << position;
                    value = quotient + 1;
                }
                _ => value = quotient,
            }
            position += 1;
        }

        Self { minus, plus }
    }

    /// Exact decimal value of all 64 trits.
    ///
    /// Accumulates ± the running power of three from the least significant
    /// trit upwards. 3^64 fits comfortably in an `i128`, so nothing is lost.
    pub const fn to_i128(&self) -> i128 {
        let mut result: i128 = 0;
        let mut weight: i128 = 1;
        let mut position = 0;

        while position < Self::WIDTH {
            let m = (self.minus >> position) & 1 == 1;
            let p = (self.plus >> position) & 1 == 1;
            if m && !p {
                result -= weight;
            } else if p && !m {
                result += weight;
            }
            weight *= 3;
            position += 1;
        }

        result
    }

    /// Decimal value truncated to 64 bits.
    ///
    /// Exact whenever the value lies in the `i64` range; otherwise the low 64
    /// bits of the exact two's complement value.
    #[inline]
    pub const fn to_i64(&self) -> i64 {
        self.to_i128() as i64
    }

    /// Build from trits, least significant first.
    pub fn from_trits(trits: [Trit; 64]) -> Self {
        let mut result = Self::ZERO;
        for (position, trit) in trits.into_iter().enumerate() {
            result.minus |= (trit.minus_bit() as u64) << position;
            result.plus |= (trit.plus_bit() as u64) << position;
        }
        result
    }

    /// All trits, least significant first.
    pub fn to_trits(&self) -> [Trit; 64] {
        let mut trits = [Trit::O; 64];
        for (position, slot) in trits.iter_mut().enumerate() {
            *slot = self.trit(position);
        }
        trits
    }

    /// Get a single trit by index (0 = least significant).
    ///
    /// An invalid `11` position reads as O, the same way comparison sees it.
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[inline]
    pub fn trit(&self, index: usize) -> Trit {
        assert!(index < Self::WIDTH as usize, "trit index {} out of range", index);
        let m = (self.minus >> index) & 1 == 1;
        let p = (self.plus >> index) & 1 == 1;
        Trit::from_planes(m, p).unwrap_or(Trit::O)
    }

    /// Set a single trit by index (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[inline]
    pub fn set_trit(&mut self, index: usize, trit: Trit) {
        assert!(index < Self::WIDTH as usize, "trit index {} out of range", index);
        let mask = 1u64 << index;
        self.minus = (self.minus & !mask) | ((trit.minus_bit() as u64) << index);
        self.plus = (self.plus & !mask) | ((trit.plus_bit() as u64) << index);
    }

    /// Negate all trits by swapping the planes.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self { minus: self.plus, plus: self.minus }
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        if self.is_negative() { self.neg() } else { *self }
    }

    /// Check if this value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.minus ^ self.plus == 0
    }

    /// Get the sign of this value (the leading non-zero trit).
    pub fn sign(&self) -> Trit {
        let nonzero = self.minus ^ self.plus;
        if nonzero == 0 {
            return Trit::O;
        }
        self.trit(63 - nonzero.leading_zeros() as usize)
    }

    /// -1, 0 or +1 as a TernaryInt.
    #[inline]
    pub fn signum(&self) -> Self {
        match self.sign() {
            Trit::N => Self::ONE.neg(),
            Trit::O => Self::ZERO,
            Trit::P => Self::ONE,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign().is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign().is_positive()
    }

    /// Three-way comparison, most significant trit first.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        arith::compare(self, other)
    }

    /// Add, reporting whether a carry was lost off the top trit.
    #[inline]
    pub fn overflowing_add(&self, other: &Self) -> (Self, bool) {
        arith::overflowing_add(self, other)
    }

    /// Subtract, reporting whether a carry was lost off the top trit.
    #[inline]
    pub fn overflowing_sub(&self, other: &Self) -> (Self, bool) {
        arith::overflowing_add(self, &other.neg())
    }

    /// Quotient and remainder, truncating toward zero.
    ///
    /// The remainder has the sign of the dividend and a magnitude smaller than
    /// the divisor, so `self == q * divisor + r` always holds.
    #[inline]
    pub fn divmod(&self, divisor: &Self) -> Result<(Self, Self), arith::ArithError> {
        arith::divmod(self, divisor)
    }

    /// Quotient, or `None` for a zero divisor.
    #[inline]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.divmod(divisor).ok().map(|(q, _)| q)
    }

    /// Remainder, or `None` for a zero divisor.
    #[inline]
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.divmod(divisor).ok().map(|(_, r)| r)
    }

    /// Shift both planes toward the most significant trit.
    #[inline]
    pub const fn shl_trits(&self, count: u32) -> Self {
        arith::shift_left(self, count)
    }

    /// Shift both planes toward the least significant trit.
    #[inline]
    pub const fn shr_trits(&self, count: u32) -> Self {
        arith::shift_right(self, count)
    }

    /// Parse from a string like "0t+-0" or "PNO" (most significant first).
    ///
    /// Strings shorter than 64 symbols are zero-extended at the top.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let s = s.strip_prefix("0t").unwrap_or(s);

        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let len = s.chars().count();
        if len > Self::WIDTH as usize {
            return Err(ParseError::TooLong { max: Self::WIDTH as usize, got: len });
        }

        let mut result = Self::ZERO;
        for (i, c) in s.chars().rev().enumerate() {
            let trit = Trit::from_symbol(c).ok_or(ParseError::InvalidChar(c))?;
            result.set_trit(i, trit);
        }

        Ok(result)
    }

    /// Drop the forbidden code from each position, leaving decoded trits.
    #[inline]
    pub(crate) const fn normalized(&self) -> (u64, u64) {
        (self.minus & !self.plus, self.plus & !self.minus)
    }
}

impl PartialEq for TernaryInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for TernaryInt {}

impl Hash for TernaryInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for TernaryInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for TernaryInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for TernaryInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TernaryInt(0t{} = {})", self, self.to_i128())
    }
}

/// 64 symbols, most significant first. `?` marks an invalid `11` position.
impl fmt::Display for TernaryInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..Self::WIDTH).rev() {
            let m = (self.minus >> i) & 1 == 1;
            let p = (self.plus >> i) & 1 == 1;
            let symbol = Trit::from_planes(m, p).map_or('?', Trit::symbol);
            f.write_char(symbol)?;
        }
        Ok(())
    }
}

impl FromStr for TernaryInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for TernaryInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i128> for TernaryInt {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<Trit> for TernaryInt {
    fn from(trit: Trit) -> Self {
        Self::from_planes(trit.minus_bit() as u64, trit.plus_bit() as u64)
    }
}

impl From<TernaryInt> for i128 {
    fn from(value: TernaryInt) -> Self {
        value.to_i128()
    }
}

impl TryFrom<TernaryInt> for i64 {
    type Error = ConvertError;

    fn try_from(value: TernaryInt) -> Result<Self, Self::Error> {
        let exact = value.to_i128();
        i64::try_from(exact).map_err(|_| {
            log::debug!("{} does not fit in i64", exact);
            ConvertError::OutOfRange { value: exact }
        })
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when parsing ternary strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty trit string")]
    Empty,

    #[error("expected at most {max} trits, got {got}")]
    TooLong { max: usize, got: usize },

    #[error("invalid trit character: '{0}' (expected one of -0+ or N/O/P)")]
    InvalidChar(char),
}

/// Errors converting between TernaryInt and other representations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("value {value} is outside the i64 range")]
    OutOfRange { value: i128 },

    #[error("invalid trit encoding (both planes set) at mask {overlap:#018x}")]
    InvalidEncoding { overlap: u64 },
}

// ============================================================================
// Tests
// ============================================================================
