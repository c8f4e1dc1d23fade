//! # Error Types
//!
//! Violations of the contextual-value contract.
//!
//! Domain-carried termination — a failure variant flowing through a chain —
//! is *not* an error here: it is ordinary data the protocol short-circuits
//! on, indistinguishable from success at the contract level except for
//! which branch `fmap`/`bind` take. These kinds cover the contract itself
//! being misused, and they propagate immediately to the caller; the core
//! never catches them internally.

use std::fmt;

use thiserror::Error;

/// The contract operations, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Lifting a plain value into the minimal context.
    Unit,
    /// Transforming the inner value.
    Map,
    /// Applying a wrapped function to a wrapped value.
    Apply,
    /// Sequencing a dependent computation.
    Bind,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Unit => "unit",
            Operation::Map => "map",
            Operation::Apply => "apply",
            Operation::Bind => "bind",
        };
        write!(f, "{name}")
    }
}

/// Violations of the contextual-value contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A contract operation was invoked on a context that provides no
    /// concrete implementation for it.
    ///
    /// The trait system rules this out for contexts implementing the full
    /// contract; the kind exists for collaborators exposing partial
    /// contexts behind this same taxonomy.
    #[error("'{operation}' is not implemented for this context")]
    NotImplemented {
        /// The operation that was invoked.
        operation: Operation,
    },

    /// A composition step produced a value of the wrong contract shape.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The shape the contract required.
        expected: &'static str,
        /// The shape the step actually produced.
        found: &'static str,
    },
}

impl ProtocolError {
    /// A missing concrete implementation for `operation`.
    pub fn not_implemented(operation: Operation) -> Self {
        ProtocolError::NotImplemented { operation }
    }
}
