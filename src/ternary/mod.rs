//! Balanced ternary number system primitives.
//!
//! This module provides the core types for working with balanced ternary:
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`TernaryInt`] - A 64-trit integer stored as two bit-planes
//! - [`arith`] - The bit-parallel algorithms behind the operators

mod trit;
mod word;
mod ops;
mod operators;
pub mod arith;

pub use trit::Trit;
pub use word::{TernaryInt, ParseError, ConvertError};
pub use ops::TritOps;
pub use arith::{add, subtract, multiply, divmod, negate, ArithError};
