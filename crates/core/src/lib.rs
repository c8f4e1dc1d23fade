//! # Contextual Core - The Contextual-Value Protocol
//!
//! This crate provides the abstract contract for sequencing computations
//! that carry an implicit context — possible absence, possible failure —
//! without each context duplicating composition logic:
//!
//! - **Contract**: the capability set every context implements (`unit`,
//!   `fmap`, `apply`, `bind`)
//! - **Composition**: the `then` family, one chainable operation whether a
//!   step returns a plain value or a contextual one
//! - **Operators**: symbolic surface (`*`, `&`, `>>`) over the contract
//! - **Errors**: contract violations as first-class values
//! - **Trace**: per-step chain observation for debugging pipelines
//! - **Laws**: the algebraic obligations, as a catalog plus generic checkers
//!
//! ## Design Philosophy
//!
//! Errors-as-values: a terminated context (a failure tag) is ordinary data
//! flowing through the happy path of the protocol, propagated by each
//! context's own short-circuit policy rather than by out-of-band signaling.
//! The caller inspects it once, at the end of a chain.
//!
//! Concrete contexts live in sibling crates; this crate compiles without
//! any.

pub mod contract;
pub mod error;
pub mod laws;
pub mod ops;
pub mod then;
pub mod trace;

// Re-export key items at crate root for convenience
pub use contract::{Applicative, Contextual, Functor, Monad, unit};
pub use error::{Operation, ProtocolError};
pub use laws::{Law, LawEntry, LawViolation, law_sheet};
pub use ops::{Lifted, lift, seq};
pub use then::{Step, ThenExt};
pub use trace::{ChainTrace, StepKind, StepOutcome, StepRecord, Traced};
