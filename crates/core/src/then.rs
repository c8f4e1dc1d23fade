//! # Composition Combinators
//!
//! One chainable operation over the contract, regardless of whether a step
//! function returns a plain value or a contextual one.
//!
//! The original dynamic formulation of this combinator probed the step's
//! result at runtime ("does it expose the contextual capability?") and fell
//! back from `bind` to `fmap`. Statically, that distinction moves to the
//! step function's declared return type:
//!
//! - [`ThenExt::then_value`] — the step returns a plain value, which is
//!   wrapped automatically (`fmap` behavior)
//! - [`ThenExt::then_context`] — the step returns a contextual value, which
//!   is returned directly (`bind` behavior)
//! - [`ThenExt::then`] — the step commits per call via the [`Step`] tagged
//!   union, for call sites that cannot commit to one shape in the signature
//!
//! All three are derived from the contract and blanket-provided; concrete
//! contexts never override them.

use crate::contract::{Applicative, Monad};
use crate::error::ProtocolError;

/// The result shape of a composition step that has not committed to a
/// plain or contextual return in its signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T, M> {
    /// A plain value; [`ThenExt::then`] wraps it via `unit`.
    Value(T),
    /// A contextual value; [`ThenExt::then`] returns it directly.
    Context(M),
}

impl<T, M> Step<T, M> {
    /// True when the step produced a plain value.
    pub fn is_value(&self) -> bool {
        matches!(self, Step::Value(_))
    }

    /// True when the step produced a contextual value.
    pub fn is_context(&self) -> bool {
        matches!(self, Step::Context(_))
    }

    /// Insist the step produced a contextual value.
    ///
    /// This is the strict chaining contract: a caller that requires a
    /// context (the way `>>` does) surfaces the violation immediately
    /// rather than silently coercing.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::TypeMismatch`] when the step produced a plain
    /// value.
    pub fn into_context(self) -> Result<M, ProtocolError> {
        match self {
            Step::Context(context) => Ok(context),
            Step::Value(_) => Err(ProtocolError::TypeMismatch {
                expected: "a contextual value",
                found: "a plain value",
            }),
        }
    }

    /// Insist the step produced a plain value.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::TypeMismatch`] when the step produced a contextual
    /// value.
    pub fn into_value(self) -> Result<T, ProtocolError> {
        match self {
            Step::Value(value) => Ok(value),
            Step::Context(_) => Err(ProtocolError::TypeMismatch {
                expected: "a plain value",
                found: "a contextual value",
            }),
        }
    }
}

/// Chainable composition, derived from the contract.
pub trait ThenExt: Monad {
    /// Chain a step that returns a plain value.
    ///
    /// Equivalent to `fmap`: the result is wrapped automatically.
    fn then_value<B, F>(self, f: F) -> Self::Rebound<B>
    where
        F: FnOnce(Self::Inner) -> B,
    {
        self.fmap(f)
    }

    /// Chain a step that returns a contextual value.
    ///
    /// Equivalent to `bind`: the step's result is returned directly.
    fn then_context<B, F>(self, f: F) -> Self::Rebound<B>
    where
        F: FnOnce(Self::Inner) -> Self::Rebound<B>,
    {
        self.bind(f)
    }

    /// Chain a step that decides its result shape per call.
    ///
    /// `Step::Value` behaves as [`ThenExt::then_value`] on that call;
    /// `Step::Context` behaves as [`ThenExt::then_context`]. A terminated
    /// context short-circuits before the step is ever invoked.
    fn then<B, F>(self, f: F) -> Self::Rebound<B>
    where
        F: FnOnce(Self::Inner) -> Step<B, Self::Rebound<B>>,
        Self::Rebound<B>: Applicative<Inner = B>,
    {
        self.bind(|inner| match f(inner) {
            Step::Value(value) => <Self::Rebound<B> as Applicative>::unit(value),
            Step::Context(context) => context,
        })
    }
}

impl<M: Monad> ThenExt for M {}
