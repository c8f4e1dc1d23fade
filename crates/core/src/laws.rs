//! # Laws - The Contract's Algebraic Obligations
//!
//! Every concrete context must satisfy the same small set of algebraic
//! laws, or composition stops being uniform and callers end up branching on
//! concrete type. This module is the law sheet: a machine-readable catalog
//! of each law, plus generic checkers any context's test suite can run.
//!
//! The checkers return `Result` rather than asserting, so a violation
//! reports which law failed and what was observed.

use std::fmt;

use thiserror::Error;

use crate::contract::{Contextual, Functor, Monad};

/// The algebraic laws the contract commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `v.fmap(identity) == v`.
    FunctorIdentity,
    /// `v.fmap(f).fmap(g) == v.fmap(g ∘ f)`.
    FunctorComposition,
    /// A terminated context passes through `fmap`/`bind` unchanged, with
    /// the step function never invoked.
    ShortCircuit,
    /// `unit(x).bind(f) == f(x)`.
    BindLeftIdentity,
    /// `v.bind(unit) == v`.
    BindRightIdentity,
    /// `v.bind(f).bind(g) == v.bind(|x| f(x).bind(g))`.
    BindAssociativity,
    /// `then_value` behaves as `fmap`; `then_context` behaves as `bind`.
    ThenUnification,
    /// Each operator is exactly its named operation.
    OperatorEquivalence,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::FunctorIdentity => "functor identity",
            Law::FunctorComposition => "functor composition",
            Law::ShortCircuit => "short-circuit",
            Law::BindLeftIdentity => "bind left identity",
            Law::BindRightIdentity => "bind right identity",
            Law::BindAssociativity => "bind associativity",
            Law::ThenUnification => "then unification",
            Law::OperatorEquivalence => "operator equivalence",
        };
        write!(f, "{name}")
    }
}

/// A single entry in the law sheet.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

/// The complete law sheet for the contract.
pub fn law_sheet() -> Vec<LawEntry> {
    vec![
        LawEntry {
            law: Law::FunctorIdentity,
            statement: "v.fmap(identity) == v",
        },
        LawEntry {
            law: Law::FunctorComposition,
            statement: "v.fmap(f).fmap(g) == v.fmap(g . f)",
        },
        LawEntry {
            law: Law::ShortCircuit,
            statement: "a terminated context passes through unchanged; the step function is never invoked",
        },
        LawEntry {
            law: Law::BindLeftIdentity,
            statement: "unit(x).bind(f) == f(x)",
        },
        LawEntry {
            law: Law::BindRightIdentity,
            statement: "v.bind(unit) == v",
        },
        LawEntry {
            law: Law::BindAssociativity,
            statement: "v.bind(f).bind(g) == v.bind(|x| f(x).bind(g))",
        },
        LawEntry {
            law: Law::ThenUnification,
            statement: "then_value == fmap; then_context == bind",
        },
        LawEntry {
            law: Law::OperatorEquivalence,
            statement: "lift(f) * v == v.fmap(f); vf & va == vf.apply(va); v >> f == v.bind(f)",
        },
    ]
}

/// A law check that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{law} law violated: {detail}")]
pub struct LawViolation {
    /// The law that failed.
    pub law: Law,
    /// What was observed.
    pub detail: String,
}

fn violated(law: Law, detail: impl Into<String>) -> LawViolation {
    LawViolation {
        law,
        detail: detail.into(),
    }
}

/// Check `v.fmap(identity) == v`.
pub fn functor_identity<M>(value: M) -> Result<(), LawViolation>
where
    M: Functor + Clone + PartialEq + fmt::Debug,
    M: Contextual<Rebound<<M as Contextual>::Inner> = M>,
{
    let mapped = value.clone().fmap(|inner| inner);
    if mapped == value {
        Ok(())
    } else {
        Err(violated(
            Law::FunctorIdentity,
            format!("{value:?}.fmap(identity) produced {mapped:?}"),
        ))
    }
}

/// Check `v.fmap(f).fmap(g) == v.fmap(g ∘ f)`.
pub fn functor_composition<M, B, C, F, G>(value: M, f: F, g: G) -> Result<(), LawViolation>
where
    M: Functor + Clone + fmt::Debug,
    F: Fn(M::Inner) -> B,
    G: Fn(B) -> C,
    M::Rebound<B>: Functor<Inner = B, Rebound<C> = M::Rebound<C>>,
    M::Rebound<C>: PartialEq + fmt::Debug,
{
    let chained = value.clone().fmap(&f).fmap(&g);
    let composed = value.fmap(|inner| g(f(inner)));
    if chained == composed {
        Ok(())
    } else {
        Err(violated(
            Law::FunctorComposition,
            format!("chained {chained:?} != composed {composed:?}"),
        ))
    }
}

/// Check `unit(x).bind(f) == f(x)`.
pub fn bind_left_identity<M, B, F>(value: M::Inner, f: F) -> Result<(), LawViolation>
where
    M: Monad,
    M::Inner: Clone + fmt::Debug,
    F: Fn(M::Inner) -> M::Rebound<B>,
    M::Rebound<B>: PartialEq + fmt::Debug,
{
    let bound = M::unit(value.clone()).bind(&f);
    let direct = f(value.clone());
    if bound == direct {
        Ok(())
    } else {
        Err(violated(
            Law::BindLeftIdentity,
            format!("unit({value:?}).bind(f) produced {bound:?}, f directly produced {direct:?}"),
        ))
    }
}

/// Check `v.bind(unit) == v`.
pub fn bind_right_identity<M>(value: M) -> Result<(), LawViolation>
where
    M: Monad + Clone + PartialEq + fmt::Debug,
    M: Contextual<Rebound<<M as Contextual>::Inner> = M>,
{
    let bound = value.clone().bind::<<M as Contextual>::Inner, _>(M::unit);
    if bound == value {
        Ok(())
    } else {
        Err(violated(
            Law::BindRightIdentity,
            format!("{value:?}.bind(unit) produced {bound:?}"),
        ))
    }
}

/// Check `v.bind(f).bind(g) == v.bind(|x| f(x).bind(g))`.
pub fn bind_associativity<M, B, C, F, G>(value: M, f: F, g: G) -> Result<(), LawViolation>
where
    M: Monad + Clone,
    F: Fn(M::Inner) -> M::Rebound<B>,
    G: Fn(B) -> M::Rebound<C>,
    M::Rebound<B>: Monad<Inner = B, Rebound<C> = M::Rebound<C>>,
    M::Rebound<C>: PartialEq + fmt::Debug,
{
    let nested = value.clone().bind(|inner| f(inner).bind::<C, _>(&g));
    let flat = value.bind(&f).bind::<C, _>(&g);
    if flat == nested {
        Ok(())
    } else {
        Err(violated(
            Law::BindAssociativity,
            format!("flat {flat:?} != nested {nested:?}"),
        ))
    }
}
