//! # Operator Surface
//!
//! Symbolic notation over the contract, for point-free composition chains.
//! Each operator is a thin pass-through to a contract operation — binary,
//! non-chaining, no precedence tricks:
//!
//! - `lift(f) * v` ≡ `v.fmap(f)` — function on the left
//! - `vf & va` ≡ `vf.apply(va)`
//! - `v >> f` ≡ `v.bind(f)` for a step function
//! - `v >> seq(w)` ≡ `v.bind(|_| w)` — run the left side only for its
//!   termination tag, then switch unconditionally to `w`
//!
//! `Mul` is implemented here, once, for every functor. Rust places binary
//! operator impls with a type the crate owns, so `BitAnd` and `Shr` are
//! implemented by each concrete context; [`seq`] produces the constant step
//! function those `Shr` impls accept.

use std::ops::Mul;

use crate::contract::Functor;

/// A step function lifted to the left-hand side of `*`.
///
/// Functions are not nameable types, so the wrapper gives `*` something to
/// hang an impl on while keeping the function-first reading.
#[derive(Clone, Copy)]
pub struct Lifted<F>(F);

/// Lift `f` so that `lift(f) * v` reads function-first, like `v.fmap(f)`.
pub fn lift<F>(f: F) -> Lifted<F> {
    Lifted(f)
}

impl<M, F, B> Mul<M> for Lifted<F>
where
    M: Functor,
    F: FnOnce(M::Inner) -> B,
{
    type Output = M::Rebound<B>;

    fn mul(self, value: M) -> Self::Output {
        value.fmap(self.0)
    }
}

/// The `>>` form whose right-hand side is already a contextual value:
/// `v >> seq(w)` discards the left side's inner value and switches
/// unconditionally to `w`, while a terminated left side still
/// short-circuits past `w` entirely.
pub fn seq<X, M>(context: M) -> impl FnOnce(X) -> M {
    move |_| context
}
