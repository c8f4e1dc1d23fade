//! The disjoint result context.
//!
//! [`Either`] tags a value as one of two alternatives: `Right` holds a
//! value downstream steps operate on, `Left` holds a value that
//! short-circuits the chain. This is the reference implementation of the
//! contract's short-circuit policy: `fmap`/`bind`/`apply` on a `Left` pass
//! the held value through unchanged and never invoke the supplied function.
//!
//! A `Left` is not an error in the contract's taxonomy — it is ordinary
//! data flowing through the protocol, inspected by the caller at the end of
//! a chain.

use std::fmt;
use std::ops::{BitAnd, Shr};

use contextual_core::contract::{Applicative, Contextual, Functor, Monad};

/// A value tagged as one of two alternatives.
///
/// Invariants:
/// - Exactly one inner value is held, under exactly one tag
/// - Composition consumes the original and produces a new, independently
///   owned value
///
/// # Example
///
/// ```rust
/// use contextual_core::contract::Monad;
/// use contextual_either::Either;
///
/// let chain: Either<String, i32> = Either::insert(3)
///     .bind(|x| Either::Right(x * 2))
///     .bind(|x| {
///         if x > 100 {
///             Either::Left("too large".to_string())
///         } else {
///             Either::Right(x + 1)
///         }
///     });
/// assert_eq!(chain, Either::Right(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<E, A> {
    /// The short-circuiting alternative.
    Left(E),
    /// The flowing alternative.
    Right(A),
}

impl<E, A> Either<E, A> {
    /// Lift a plain value into the minimal context (`Right`).
    pub fn insert(value: A) -> Self {
        Either::Right(value)
    }

    /// True for the flowing alternative.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// True for the short-circuiting alternative.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }
}

impl<E, A> Contextual for Either<E, A> {
    type Inner = A;
    type Rebound<B> = Either<E, B>;
}

impl<E, A> Functor for Either<E, A> {
    fn fmap<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Right(value) => Either::Right(f(value)),
            Either::Left(term) => Either::Left(term),
        }
    }
}

impl<E, A> Applicative for Either<E, A> {
    fn unit(value: A) -> Self {
        Either::Right(value)
    }

    /// Short-circuit policy: the function side is inspected first, so when
    /// both sides are `Left` the function side's value wins.
    fn apply<X, B>(self, arg: Either<E, X>) -> Either<E, B>
    where
        A: FnOnce(X) -> B,
    {
        match (self, arg) {
            (Either::Right(f), Either::Right(value)) => Either::Right(f(value)),
            (Either::Left(term), _) => Either::Left(term),
            (_, Either::Left(term)) => Either::Left(term),
        }
    }
}

impl<E, A> Monad for Either<E, A> {
    fn bind<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Right(value) => f(value),
            Either::Left(term) => Either::Left(term),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Right(value) => write!(f, "Right {value}"),
            Either::Left(term) => write!(f, "Left {term}"),
        }
    }
}

/// The `>>` operator: `v >> f` is `v.bind(f)`.
///
/// The step must return the same context family; `contextual_core::seq`
/// produces the constant step for the "switch unconditionally to an
/// existing context" form, `v >> seq(w)`.
impl<E, A, B, F> Shr<F> for Either<E, A>
where
    F: FnOnce(A) -> Either<E, B>,
{
    type Output = Either<E, B>;

    fn shr(self, step: F) -> Either<E, B> {
        self.bind(step)
    }
}

/// The `&` operator: `vf & va` is `vf.apply(va)`.
impl<E, F, X, B> BitAnd<Either<E, X>> for Either<E, F>
where
    F: FnOnce(X) -> B,
{
    type Output = Either<E, B>;

    fn bitand(self, arg: Either<E, X>) -> Either<E, B> {
        self.apply(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextual_core::ops::{lift, seq};
    use contextual_core::then::{Step, ThenExt};
    use contextual_core::trace::{StepOutcome, Traced};

    fn right(value: i32) -> Either<String, i32> {
        Either::Right(value)
    }

    fn left(term: i32) -> Either<i32, i32> {
        Either::Left(term)
    }

    #[test]
    fn rendering_labels_the_variant() {
        assert_eq!(Either::<i32, i32>::Right(9).to_string(), "Right 9");
        assert_eq!(Either::<i32, i32>::Left(9).to_string(), "Left 9");
    }

    #[test]
    fn insert_lifts_into_right() {
        assert_eq!(Either::<i32, i32>::insert(1), Either::Right(1));
    }

    #[test]
    fn variants_with_equal_inner_values_are_not_equal() {
        assert_ne!(Either::<i32, i32>::Right(9), Either::Left(9));
    }

    #[test]
    fn fmap_transforms_right() {
        assert_eq!(right(3).fmap(|x| x + 1), right(4));
    }

    #[test]
    fn fmap_never_invokes_on_left() {
        let mut calls = 0;
        let result = left(9).fmap(|x| {
            calls += 1;
            x + 1
        });
        assert_eq!(result, left(9));
        assert_eq!(calls, 0);
    }

    #[test]
    fn bind_sequences_right() {
        assert_eq!(right(3).bind(|x| right(x * 2)), right(6));
    }

    #[test]
    fn bind_never_invokes_on_left() {
        let mut calls = 0;
        let result = left(9).bind(|x| {
            calls += 1;
            Either::Right(x * 2)
        });
        assert_eq!(result, left(9));
        assert_eq!(calls, 0);
    }

    #[test]
    fn apply_combines_two_rights() {
        let wrapped_fn: Either<i32, _> = Either::Right(|x: i32| x + 10);
        assert_eq!(wrapped_fn.apply(Either::Right(1)), Either::Right(11));
    }

    #[test]
    fn apply_function_side_left_wins() {
        // Both sides Left: the function side is inspected first.
        let wrapped_fn: Either<i32, fn(i32) -> i32> = Either::Left(1);
        assert_eq!(wrapped_fn.apply(Either::Left(2)), Either::Left(1));
    }

    #[test]
    fn apply_either_side_left_short_circuits() {
        let left_fn: Either<i32, fn(i32) -> i32> = Either::Left(7);
        assert_eq!(left_fn.apply(Either::Right(1)), Either::Left(7));

        let right_fn: Either<i32, _> = Either::Right(|x: i32| x + 1);
        assert_eq!(right_fn.apply(Either::Left(7)), Either::Left(7));
    }

    #[test]
    fn then_value_matches_fmap() {
        assert_eq!(right(3).then_value(|x| x + 1), right(3).fmap(|x| x + 1));
        assert_eq!(left(9).then_value(|x| x + 1), left(9));
    }

    #[test]
    fn then_context_matches_bind() {
        assert_eq!(
            right(3).then_context(|x| right(x + 1)),
            right(3).bind(|x| right(x + 1))
        );
        assert_eq!(left(9).then_context(left), left(9));
    }

    #[test]
    fn then_unifies_both_step_shapes() {
        assert_eq!(right(3).then(|x| Step::Value(x + 1)), right(4));
        assert_eq!(right(3).then(|x| Step::Context(right(x + 1))), right(4));
        assert_eq!(left(9).then(|x| Step::Value(x + 1)), left(9));
    }

    #[test]
    fn shr_is_bind() {
        assert_eq!(right(3) >> (|x| right(x * 2)), right(3).bind(|x| right(x * 2)));
        assert_eq!(left(9) >> (|x| left(x * 2)), left(9));
    }

    #[test]
    fn shr_seq_switches_unconditionally_on_right() {
        assert_eq!(right(3) >> seq(right(42)), right(42));
    }

    #[test]
    fn shr_seq_still_short_circuits_on_left() {
        assert_eq!(left(9) >> seq(left(42)), left(9));
    }

    #[test]
    fn bitand_is_apply() {
        let wrapped_fn: Either<i32, _> = Either::Right(|x: i32| x + 10);
        assert_eq!(wrapped_fn & Either::Right(1), Either::Right(11));
    }

    #[test]
    fn lift_mul_is_fmap() {
        assert_eq!(lift(|x: i32| x + 1) * right(3), right(4));
        assert_eq!(lift(|x: i32| x + 1) * left(9), left(9));
    }

    #[test]
    fn traced_chain_records_short_circuits() {
        let start: Either<String, i32> = Either::Right(1);
        let (value, trace) = Traced::new(start)
            .fmap(|x| x + 1)
            .bind(|_| Either::Left("stop".to_string()))
            .fmap(|x: i32| x * 10)
            .bind(Either::Right)
            .into_parts();

        assert_eq!(value, Either::Left("stop".to_string()));
        assert_eq!(trace.len(), 4);
        assert_eq!(trace.short_circuited(), 2);
        assert_eq!(trace.steps()[0].outcome, StepOutcome::Applied);
        assert_eq!(trace.steps()[1].outcome, StepOutcome::Applied);
        assert_eq!(trace.steps()[2].outcome, StepOutcome::ShortCircuited);
        assert_eq!(trace.steps()[3].outcome, StepOutcome::ShortCircuited);
    }
}
