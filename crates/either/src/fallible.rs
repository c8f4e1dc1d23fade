//! A display-only relabeling of [`Either`].
//!
//! The protocol is independent of label choice: [`Fallible`] carries the
//! exact short-circuit semantics of `Either` and differs only in how the
//! two alternatives are named and rendered — `Result: 9` / `Error: 9`
//! instead of `Right 9` / `Left 9`. Every contract operation delegates to
//! the wrapped `Either`.

use std::fmt;
use std::ops::{BitAnd, Shr};

use contextual_core::contract::{Applicative, Contextual, Functor, Monad};

use crate::either::Either;

/// [`Either`] under failure-flavored labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fallible<E, A>(Either<E, A>);

impl<E, A> Fallible<E, A> {
    /// The flowing alternative.
    pub fn result(value: A) -> Self {
        Fallible(Either::Right(value))
    }

    /// The short-circuiting alternative.
    pub fn error(term: E) -> Self {
        Fallible(Either::Left(term))
    }

    /// Lift a plain value into the minimal context (`result`).
    pub fn insert(value: A) -> Self {
        Self::result(value)
    }

    /// True for the flowing alternative.
    pub fn is_result(&self) -> bool {
        self.0.is_right()
    }

    /// True for the short-circuiting alternative.
    pub fn is_error(&self) -> bool {
        self.0.is_left()
    }

    /// Strip the relabeling.
    pub fn into_either(self) -> Either<E, A> {
        self.0
    }
}

impl<E, A> From<Either<E, A>> for Fallible<E, A> {
    fn from(inner: Either<E, A>) -> Self {
        Fallible(inner)
    }
}

impl<E, A> From<Fallible<E, A>> for Either<E, A> {
    fn from(fallible: Fallible<E, A>) -> Self {
        fallible.0
    }
}

impl<E, A> Contextual for Fallible<E, A> {
    type Inner = A;
    type Rebound<B> = Fallible<E, B>;
}

impl<E, A> Functor for Fallible<E, A> {
    fn fmap<B, F>(self, f: F) -> Fallible<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Fallible(self.0.fmap(f))
    }
}

impl<E, A> Applicative for Fallible<E, A> {
    fn unit(value: A) -> Self {
        Self::result(value)
    }

    fn apply<X, B>(self, arg: Fallible<E, X>) -> Fallible<E, B>
    where
        A: FnOnce(X) -> B,
    {
        Fallible(self.0.apply(arg.0))
    }
}

impl<E, A> Monad for Fallible<E, A> {
    fn bind<B, F>(self, f: F) -> Fallible<E, B>
    where
        F: FnOnce(A) -> Fallible<E, B>,
    {
        Fallible(self.0.bind(|value| f(value).0))
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Fallible<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Either::Right(value) => write!(f, "Result: {value}"),
            Either::Left(term) => write!(f, "Error: {term}"),
        }
    }
}

/// The `>>` operator: `v >> f` is `v.bind(f)`.
impl<E, A, B, F> Shr<F> for Fallible<E, A>
where
    F: FnOnce(A) -> Fallible<E, B>,
{
    type Output = Fallible<E, B>;

    fn shr(self, step: F) -> Fallible<E, B> {
        self.bind(step)
    }
}

/// The `&` operator: `vf & va` is `vf.apply(va)`.
impl<E, F, X, B> BitAnd<Fallible<E, X>> for Fallible<E, F>
where
    F: FnOnce(X) -> B,
{
    type Output = Fallible<E, B>;

    fn bitand(self, arg: Fallible<E, X>) -> Fallible<E, B> {
        self.apply(arg)
    }
}
