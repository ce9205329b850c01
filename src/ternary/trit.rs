//! Single balanced ternary digit (trit).
//!
//! A trit can hold one of three values: -1, 0, or +1.
//! Inside a [`TernaryInt`](crate::TernaryInt) each trit position is spread
//! over two bit-planes. Read as a 2-bit code `(minus << 1) | plus`:
//! - `0b00` = 0 (Zero)
//! - `0b01` = +1 (Positive)
//! - `0b10` = -1 (Negative)
//! - `0b11` = Invalid (never produced by arithmetic)

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single balanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trit {
    /// Negative (-1)
    N = 0b10,
    /// Zero (0)
    #[default]
    O = 0b00,
    /// Positive (+1)
    P = 0b01,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Decode a trit from its minus/plus plane bits.
    ///
    /// Returns `None` for the forbidden `11` code.
    #[inline]
    pub const fn from_planes(minus: bool, plus: bool) -> Option<Self> {
        match (minus, plus) {
            (false, false) => Some(Trit::O),
            (false, true) => Some(Trit::P),
            (true, false) => Some(Trit::N),
            (true, true) => None,
        }
    }

    /// Decode a trit from a raw 2-bit code (upper bits ignored).
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        Self::from_planes(code & 0b10 != 0, code & 0b01 != 0)
    }

    /// The raw 2-bit code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Bit to set in the minus-plane for this trit.
    #[inline]
    pub const fn minus_bit(self) -> bool {
        matches!(self, Trit::N)
    }

    /// Bit to set in the plus-plane for this trit.
    #[inline]
    pub const fn plus_bit(self) -> bool {
        matches!(self, Trit::P)
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self {
            Trit::N => -1,
            Trit::O => 0,
            Trit::P => 1,
        }
    }

    /// Parse one display symbol. Accepts `-0+` and the letter forms `NOP`.
    #[inline]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'N' | 'n' | '-' => Some(Trit::N),
            'O' | 'o' | '0' => Some(Trit::O),
            'P' | 'p' | '+' => Some(Trit::P),
            _ => None,
        }
    }

    /// Display symbol: `-`, `0` or `+`.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Trit::N => '-',
            Trit::O => '0',
            Trit::P => '+',
        }
    }

    /// Negate the trit (flip N ↔ P, O stays O).
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Trit::N => Trit::P,
            Trit::O => Trit::O,
            Trit::P => Trit::N,
        }
    }

    /// Minimum (ternary AND) - returns the lesser value.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.to_i8() <= other.to_i8() { self } else { other }
    }

    /// Maximum (ternary OR) - returns the greater value.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        if self.to_i8() >= other.to_i8() { self } else { other }
    }

    /// Consensus - returns the value if both inputs match, else O.
    #[inline]
    pub const fn consensus(self, other: Self) -> Self {
        match (self, other) {
            (Trit::P, Trit::P) => Trit::P,
            (Trit::N, Trit::N) => Trit::N,
            _ => Trit::O,
        }
    }

    /// Half-adder sum: (a + b) mod 3, normalized to {-1, 0, 1}.
    #[inline]
    pub const fn sum(self, other: Self) -> Self {
        match self.to_i8() + other.to_i8() {
            -2 | 1 => Trit::P,
            2 | -1 => Trit::N,
            _ => Trit::O,
        }
    }

    /// Half-adder carry: carry output when adding two trits.
    #[inline]
    pub const fn carry(self, other: Self) -> Self {
        match self.to_i8() + other.to_i8() {
            -2 => Trit::N,
            2 => Trit::P,
            _ => Trit::O,
        }
    }

    /// Single-trit multiplication (never carries).
    #[inline]
    pub const fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Trit::O, _) | (_, Trit::O) => Trit::O,
            (Trit::P, Trit::P) | (Trit::N, Trit::N) => Trit::P,
            (Trit::P, Trit::N) | (Trit::N, Trit::P) => Trit::N,
        }
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::O)
    }

    /// Returns true if this trit is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Trit::P)
    }

    /// Returns true if this trit is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Trit::N)
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Trit::neg(self)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}

impl TryFrom<i8> for Trit {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Trit::N),
            0 => Ok(Trit::O),
            1 => Ok(Trit::P),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_involution() {
        for t in Trit::ALL {
            assert_eq!(t.neg().neg(), t, "negate(negate({:?})) should equal {:?}", t, t);
        }
    }

    #[test]
    fn test_sum_and_carry_reconstruct_value() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                let total = a.to_i8() + b.to_i8();
                let rebuilt = a.sum(b).to_i8() + 3 * a.carry(b).to_i8();
                assert_eq!(rebuilt, total, "{:?} + {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_multiplication_table() {
        assert_eq!(Trit::N.mul(Trit::N), Trit::P);
        assert_eq!(Trit::N.mul(Trit::O), Trit::O);
        assert_eq!(Trit::N.mul(Trit::P), Trit::N);
        assert_eq!(Trit::O.mul(Trit::N), Trit::O);
        assert_eq!(Trit::P.mul(Trit::P), Trit::P);
        assert_eq!(Trit::P.mul(Trit::N), Trit::N);
    }

    #[test]
    fn test_plane_codes() {
        assert_eq!(Trit::from_planes(false, false), Some(Trit::O));
        assert_eq!(Trit::from_planes(false, true), Some(Trit::P));
        assert_eq!(Trit::from_planes(true, false), Some(Trit::N));
        assert_eq!(Trit::from_planes(true, true), None);
        assert_eq!(Trit::from_code(0b11), None);
        for t in Trit::ALL {
            assert_eq!(Trit::from_code(t.code()), Some(t));
            assert_eq!(Trit::from_planes(t.minus_bit(), t.plus_bit()), Some(t));
        }
    }

    #[test]
    fn test_consensus() {
        assert_eq!(Trit::P.consensus(Trit::P), Trit::P);
        assert_eq!(Trit::N.consensus(Trit::N), Trit::N);
        assert_eq!(Trit::P.consensus(Trit::N), Trit::O);
        assert_eq!(Trit::P.consensus(Trit::O), Trit::O);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(Trit::P.min(Trit::N), Trit::N);
        assert_eq!(Trit::P.max(Trit::N), Trit::P);
        assert_eq!(Trit::O.min(Trit::P), Trit::O);
        assert_eq!(Trit::O.max(Trit::N), Trit::O);
    }

    #[test]
    fn test_symbols() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_symbol(t.symbol()), Some(t));
            assert_eq!(Trit::from_symbol(format!("{:?}", t).chars().next().unwrap()), Some(t));
        }
        assert_eq!(Trit::from_symbol('?'), None);
        assert_eq!(Trit::try_from(2i8), Err(2));
    }
}
