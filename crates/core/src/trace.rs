//! # Chain Observation
//!
//! A recording wrapper for composition pipelines.
//!
//! The contract deliberately exposes no way to inspect a context's tag, so
//! a chain's behavior — which steps ran, which were skipped — is invisible
//! from outside. [`Traced`] makes it observable: it mirrors the composition
//! operations and records, per step, whether the step function was applied
//! or the context short-circuited past it. Detection instruments the step
//! closure itself; the wrapped context is never inspected.
//!
//! The trace renders one numbered line per step, for logging and for test
//! assertions about short-circuit behavior.

use std::fmt;

use crate::contract::{Applicative, Functor, Monad};
use crate::then::{Step, ThenExt};

/// The contract operation a recorded step went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A `fmap`/`then_value` step.
    Map,
    /// A `bind`/`then_context` step.
    Bind,
    /// A [`Step`]-shaped `then` step.
    Then,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Map => "map",
            StepKind::Bind => "bind",
            StepKind::Then => "then",
        };
        write!(f, "{name}")
    }
}

/// Whether a step function ran, or the context short-circuited past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step function was invoked on the inner value.
    Applied,
    /// The context was already terminated; the function was never invoked.
    ShortCircuited,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepOutcome::Applied => "applied",
            StepOutcome::ShortCircuited => "short-circuited",
        };
        write!(f, "{name}")
    }
}

/// One recorded composition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// Which operation the chain went through.
    pub kind: StepKind,
    /// Whether the step function ran.
    pub outcome: StepOutcome,
}

/// The ordered record of every step a chain went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainTrace {
    steps: Vec<StepRecord>,
}

impl ChainTrace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: StepKind, invoked: bool) {
        let outcome = if invoked {
            StepOutcome::Applied
        } else {
            StepOutcome::ShortCircuited
        };
        self.steps.push(StepRecord { kind, outcome });
    }

    /// The recorded steps, in chain order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// How many steps the context short-circuited past.
    pub fn short_circuited(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::ShortCircuited)
            .count()
    }
}

impl fmt::Display for ChainTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {:<5} {}", i + 1, step.kind.to_string(), step.outcome)?;
        }
        Ok(())
    }
}

/// A contextual value that records the composition steps applied to it.
///
/// The wrapper mirrors `fmap`, `bind`, and `then`; each call appends a
/// [`StepRecord`] and rewraps the result, so a whole chain can be written
/// against `Traced` and unwrapped once at the end.
#[derive(Debug, Clone)]
pub struct Traced<M> {
    inner: M,
    trace: ChainTrace,
}

impl<M> Traced<M> {
    /// Start recording on `inner` with an empty trace.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            trace: ChainTrace::new(),
        }
    }

    /// The wrapped contextual value.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The steps recorded so far.
    pub fn trace(&self) -> &ChainTrace {
        &self.trace
    }

    /// Unwrap into the final contextual value and its trace.
    pub fn into_parts(self) -> (M, ChainTrace) {
        (self.inner, self.trace)
    }

    /// Mirror of [`Functor::fmap`], recording whether `f` ran.
    pub fn fmap<B, F>(self, f: F) -> Traced<M::Rebound<B>>
    where
        M: Functor,
        F: FnOnce(M::Inner) -> B,
    {
        let mut invoked = false;
        let inner = self.inner.fmap(|value| {
            invoked = true;
            f(value)
        });
        let mut trace = self.trace;
        trace.push(StepKind::Map, invoked);
        Traced { inner, trace }
    }

    /// Mirror of [`Monad::bind`], recording whether `f` ran.
    pub fn bind<B, F>(self, f: F) -> Traced<M::Rebound<B>>
    where
        M: Monad,
        F: FnOnce(M::Inner) -> M::Rebound<B>,
    {
        let mut invoked = false;
        let inner = self.inner.bind(|value| {
            invoked = true;
            f(value)
        });
        let mut trace = self.trace;
        trace.push(StepKind::Bind, invoked);
        Traced { inner, trace }
    }

    /// Mirror of [`ThenExt::then`], recording whether `f` ran.
    pub fn then<B, F>(self, f: F) -> Traced<M::Rebound<B>>
    where
        M: Monad,
        F: FnOnce(M::Inner) -> Step<B, M::Rebound<B>>,
        M::Rebound<B>: Applicative<Inner = B>,
    {
        let mut invoked = false;
        let inner = self.inner.then(|value| {
            invoked = true;
            f(value)
        });
        let mut trace = self.trace;
        trace.push(StepKind::Then, invoked);
        Traced { inner, trace }
    }
}
