//! Smoke tests for the protocol crate.
//!
//! These define the simplest possible concrete context — a wrapper with no
//! termination tag at all — and verify the contract, the `then` family, and
//! the generic operator surface stand on their own, without any
//! short-circuiting context in play.

use contextual_core::contract::{Applicative, Contextual, Functor, Monad, unit};
use contextual_core::laws;
use contextual_core::ops::{lift, seq};
use contextual_core::then::{Step, ThenExt};

/// The minimal context: holds exactly one value, never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plain<T>(T);

impl<T> Contextual for Plain<T> {
    type Inner = T;
    type Rebound<B> = Plain<B>;
}

impl<T> Functor for Plain<T> {
    fn fmap<B, F>(self, f: F) -> Plain<B>
    where
        F: FnOnce(T) -> B,
    {
        Plain(f(self.0))
    }
}

impl<T> Applicative for Plain<T> {
    fn unit(value: T) -> Self {
        Plain(value)
    }

    fn apply<A, B>(self, arg: Plain<A>) -> Plain<B>
    where
        T: FnOnce(A) -> B,
    {
        Plain((self.0)(arg.0))
    }
}

impl<T> Monad for Plain<T> {
    fn bind<B, F>(self, f: F) -> Plain<B>
    where
        F: FnOnce(T) -> Plain<B>,
    {
        f(self.0)
    }
}

// ============================================================================
// Contract Operations
// ============================================================================

#[test]
fn smoke_unit_wraps() {
    let wrapped: Plain<i32> = unit(5);
    assert_eq!(wrapped, Plain(5));
    assert_eq!(Plain::unit(5), Plain(5));
}

#[test]
fn smoke_fmap_transforms() {
    assert_eq!(Plain(2).fmap(|x| x * 3), Plain(6));
}

#[test]
fn smoke_apply_combines() {
    let wrapped_fn = Plain(|x: i32| x + 10);
    assert_eq!(wrapped_fn.apply(Plain(1)), Plain(11));
}

#[test]
fn smoke_bind_sequences() {
    assert_eq!(Plain(2).bind(|x| Plain(x + 1)), Plain(3));
}

// ============================================================================
// Composition Combinators
// ============================================================================

#[test]
fn smoke_then_value_wraps_plain_results() {
    assert_eq!(Plain(2).then_value(|x| x + 1), Plain(2).fmap(|x| x + 1));
}

#[test]
fn smoke_then_context_returns_contexts_directly() {
    assert_eq!(
        Plain(2).then_context(|x| Plain(x + 1)),
        Plain(2).bind(|x| Plain(x + 1))
    );
}

#[test]
fn smoke_then_unifies_both_shapes() {
    let via_value = Plain(2).then(|x| Step::Value(x + 1));
    let via_context = Plain(2).then(|x| Step::Context(Plain(x + 1)));
    assert_eq!(via_value, Plain(3));
    assert_eq!(via_context, Plain(3));
}

// ============================================================================
// Operator Surface
// ============================================================================

#[test]
fn smoke_lift_mul_is_fmap() {
    let product = lift(|x: i32| x + 1) * Plain(4);
    assert_eq!(product, Plain(4).fmap(|x| x + 1));
}

#[test]
fn smoke_seq_is_the_constant_step() {
    // `seq(w)` is the function a `>>`-style chain hands to `bind`.
    let replaced = Plain(1).bind(seq(Plain("next")));
    assert_eq!(replaced, Plain("next"));
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn smoke_laws_hold_for_the_minimal_context() {
    laws::functor_identity(Plain(7)).unwrap();
    laws::functor_composition(Plain(7), |x: i32| x + 1, |x: i32| x * 2).unwrap();
    laws::bind_left_identity::<Plain<i32>, i32, _>(7, |x| Plain(x + 1)).unwrap();
    laws::bind_right_identity(Plain(7)).unwrap();
    laws::bind_associativity(Plain(7), |x: i32| Plain(x + 1), |x: i32| Plain(x * 2)).unwrap();
}

#[test]
fn smoke_law_sheet_covers_the_contract() {
    let sheet = contextual_core::law_sheet();
    assert!(sheet.len() >= 8);
}
