//! # Contextual Either - The Disjoint Result Context
//!
//! One concrete instantiation of the contextual-value protocol, validating
//! the contract end-to-end: a value tagged as one of two alternatives,
//! where `Right` flows through composition and `Left` short-circuits it.
//!
//! ## Example
//!
//! ```rust
//! use contextual_core::contract::Monad;
//! use contextual_either::Either;
//!
//! fn halve(x: i32) -> Either<String, i32> {
//!     if x % 2 == 0 {
//!         Either::Right(x / 2)
//!     } else {
//!         Either::Left(format!("{x} is odd"))
//!     }
//! }
//!
//! assert_eq!(Either::insert(8).bind(halve).bind(halve), Either::Right(2));
//! assert_eq!(
//!     Either::insert(6).bind(halve).bind(halve),
//!     Either::Left("3 is odd".to_string()),
//! );
//! ```

mod either;
mod fallible;

pub use either::Either;
pub use fallible::Fallible;
