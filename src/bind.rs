//! One chaining vocabulary for every wrapper.
//!
//! [`Bindable`] abstracts over `Maybe`, `Outcome` and `Writer` through a
//! generic associated type, so combinators that only need `pure`, `fmap` and
//! `flat_map` are written once. Kleisli composition
//! ([`compose_kleisli`](crate::compose::compose_kleisli)) and the deferred
//! adapter ([`DeferredExt`](crate::DeferredExt)) are built on it.
//!
//! # Laws
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)                                   (left identity)
//! m.flat_map(M::pure) == m                                         (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))    (associativity)
//! ```
//!
//! # Example
//!
//! ```rust
//! use wellspring::{Bindable, Maybe, Outcome};
//!
//! fn increment_all<M>(m: M) -> M::Rebind<i32>
//! where
//!     M: Bindable<Item = i32>,
//! {
//!     m.flat_map(|x| <M::Rebind<i32> as Bindable>::pure(x + 1))
//! }
//!
//! assert_eq!(increment_all(Maybe::just(1)), Maybe::just(2));
//! assert_eq!(increment_all(Outcome::<i32, &str>::failure("e")), Outcome::failure("e"));
//! ```

use crate::{Maybe, Monoid, Outcome, Semigroup, Writer};

/// A wrapper whose item can be replaced, transformed and chained.
pub trait Bindable: Sized {
    /// The wrapped item type.
    type Item;

    /// The same wrapper around a different item type.
    type Rebind<U>: Bindable<Item = U>;

    /// Wrap a value with no effect attached.
    fn pure(value: Self::Item) -> Self;

    /// Transform the item.
    fn fmap<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Item) -> U;

    /// Chain a step producing the same wrapper.
    fn flat_map<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Item) -> Self::Rebind<U>;
}

impl<T> Bindable for Maybe<T> {
    type Item = T;
    type Rebind<U> = Maybe<U>;

    #[inline]
    fn pure(value: T) -> Self {
        Maybe::just(value)
    }

    #[inline]
    fn fmap<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    #[inline]
    fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(f)
    }
}

impl<T, E> Bindable for Outcome<T, E> {
    type Item = T;
    type Rebind<U> = Outcome<U, E>;

    #[inline]
    fn pure(value: T) -> Self {
        Outcome::success(value)
    }

    #[inline]
    fn fmap<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    #[inline]
    fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.bind(f)
    }
}

impl<T, L> Bindable for Writer<T, L>
where
    L: Monoid,
{
    type Item = T;
    type Rebind<U> = Writer<U, L>;

    #[inline]
    fn pure(value: T) -> Self {
        Writer::pure(value)
    }

    #[inline]
    fn fmap<U, F>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    #[inline]
    fn flat_map<U, F>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Writer<U, L>,
    {
        self.bind_with(f, Semigroup::combine)
    }
}
