//! # Ternary Int
//!
//! Fixed-width signed integers in balanced ternary.
//!
//! A [`TernaryInt`] holds 64 trits (digits in {-1, 0, +1}) packed into two
//! 64-bit planes, one marking the -1 positions and one marking the +1
//! positions. Addition, multiplication, comparison and division all work on
//! the planes directly with whole-word boolean operations.
//!
//! ```
//! use ternaryint::TernaryInt;
//!
//! let a = TernaryInt::from(12_345_679i64);
//! let b = TernaryInt::from(-8i64);
//! assert_eq!((a * b).to_i64(), -98_765_432);
//!
//! let (q, r) = TernaryInt::from(-1003i64).divmod(&TernaryInt::from(5i64)).unwrap();
//! assert_eq!((q.to_i64(), r.to_i64()), (-200, -3));
//! ```

pub mod ternary;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Trit, TernaryInt, TritOps, ArithError, ParseError, ConvertError};
