//! Deferred counterparts of every operation
//!
//! Values produced by a [`Future`] are handled in two ways:
//!
//! - [`AsyncBind`]: `map_async` / `bind_async` on a ready wrapper, where the
//!   step itself returns a future. The future is only created and awaited on
//!   the `Just` / `Success` path.
//! - [`DeferredExt`]: `then_map` / `then_bind` / `then_map_async` /
//!   `then_bind_async` on any future whose output is [`Bindable`]. Each awaits
//!   the pending value first, then delegates to the synchronous operation.
//!
//! The `sequence_*_async` and `traverse_*_async` functions are strictly
//! sequential: each future completes before the next is polled, and nothing
//! after the first `Nothing` or `Failure` is ever polled.
//!
//! Nothing here spawns tasks or depends on a particular runtime.
//!
//! # Example
//!
//! ```rust
//! use wellspring::{DeferredExt, Outcome};
//!
//! async fn load(id: u32) -> Outcome<String, String> {
//!     if id == 0 {
//!         Outcome::failure("no such user".to_string())
//!     } else {
//!         Outcome::success(format!("user-{id}"))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let name = load(7).then_map(|n| n.to_uppercase()).await;
//! assert_eq!(name, Outcome::success("USER-7".to_string()));
//!
//! let missing = load(0).then_map(|n| n.len()).await;
//! assert_eq!(missing, Outcome::failure("no such user".to_string()));
//! # });
//! ```

use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::outcome::{captured, panic_message};
use crate::{Bindable, Maybe, Monoid, Outcome, Writer};

/// Map and bind with steps that return futures.
pub trait AsyncBind: Bindable {
    /// Transform the item with an asynchronous function.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Self::Rebind<U>>
    where
        F: FnOnce(Self::Item) -> Fut,
        Fut: Future<Output = U>;

    /// Chain an asynchronous step producing the same wrapper.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Self::Rebind<U>>
    where
        F: FnOnce(Self::Item) -> Fut,
        Fut: Future<Output = Self::Rebind<U>>;
}

impl<T> AsyncBind for Maybe<T> {
    async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value).await),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    async fn bind_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Maybe::Just(value) => f(value).await,
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T, E> AsyncBind for Outcome<T, E> {
    async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value).await),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Success(value) => f(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, L: Monoid> AsyncBind for Writer<T, L> {
    async fn map_async<U, F, Fut>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Writer::map_async(self, f).await
    }

    async fn bind_async<U, F, Fut>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Writer<U, L>>,
    {
        self.bind_with_async(f, L::combine).await
    }
}

impl<T, L> Writer<T, L> {
    /// Transform the value with an asynchronous function; the log is untouched.
    ///
    /// Works for any log type, monoid or not.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        let (value, log) = self.run();
        Writer::new(f(value).await, log)
    }

    /// Deferred [`bind_with`](Writer::bind_with): await the next writer and
    /// join the logs as `combine(current, next)`.
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// async fn triple(x: i32) -> Writer<i32, String> {
    ///     Writer::new(x * 3, "tripled".to_string())
    /// }
    ///
    /// let join = |a: String, b: String| if a.is_empty() { b } else { format!("{a}; {b}") };
    ///
    /// # tokio_test::block_on(async {
    /// let w = Writer::new(2, "start".to_string())
    ///     .bind_with_async(triple, join)
    ///     .await;
    /// assert_eq!(w.run(), (6, "start; tripled".to_string()));
    /// # });
    /// ```
    pub async fn bind_with_async<U, F, Fut, C>(self, f: F, combine: C) -> Writer<U, L>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Writer<U, L>>,
        C: FnOnce(L, L) -> L,
    {
        let (value, log) = self.run();
        let (next, more) = f(value).await.run();
        Writer::new(next, combine(log, more))
    }
}

/// Chaining on futures whose output is a wrapper.
///
/// Implemented for every `Future<Output = M>` with `M: Bindable`.
pub trait DeferredExt<M: Bindable>: Future<Output = M> + Sized {
    /// Await, then [`fmap`](Bindable::fmap).
    fn then_map<U, F>(self, f: F) -> impl Future<Output = M::Rebind<U>>
    where
        F: FnOnce(M::Item) -> U,
    {
        async move { self.await.fmap(f) }
    }

    /// Await, then [`flat_map`](Bindable::flat_map).
    fn then_bind<U, F>(self, f: F) -> impl Future<Output = M::Rebind<U>>
    where
        F: FnOnce(M::Item) -> M::Rebind<U>,
    {
        async move { self.await.flat_map(f) }
    }

    /// Await, then [`map_async`](AsyncBind::map_async).
    fn then_map_async<U, F, Fut>(self, f: F) -> impl Future<Output = M::Rebind<U>>
    where
        M: AsyncBind,
        F: FnOnce(M::Item) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Await, then [`bind_async`](AsyncBind::bind_async).
    fn then_bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = M::Rebind<U>>
    where
        M: AsyncBind,
        F: FnOnce(M::Item) -> Fut,
        Fut: Future<Output = M::Rebind<U>>,
    {
        async move { self.await.bind_async(f).await }
    }
}

impl<M, Fut> DeferredExt<M> for Fut
where
    M: Bindable,
    Fut: Future<Output = M>,
{
}

/// Await each pending `Maybe` in turn; `Nothing` stops the walk.
///
/// ```rust
/// use wellspring::{Maybe, deferred::sequence_maybe_async};
///
/// # tokio_test::block_on(async {
/// async fn fetch(x: i32) -> Maybe<i32> {
///     Maybe::just(x)
/// }
///
/// let pending = vec![fetch(1), fetch(2)];
/// assert_eq!(sequence_maybe_async(pending).await, Maybe::just(vec![1, 2]));
/// # });
/// ```
pub async fn sequence_maybe_async<T, I, Fut>(iter: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Maybe<T>>,
{
    let mut values = Vec::new();
    for pending in iter {
        match pending.await {
            Maybe::Just(value) => values.push(value),
            Maybe::Nothing => return Maybe::Nothing,
        }
    }
    Maybe::Just(values)
}

/// Await each pending `Outcome` in turn; the first `Failure` is returned.
pub async fn sequence_outcome_async<T, E, I, Fut>(iter: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    let mut values = Vec::new();
    for pending in iter {
        match pending.await {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Map each element to a pending `Maybe` and sequence the results.
///
/// `f` is not called for elements after the first `Nothing`.
pub async fn traverse_maybe_async<T, U, I, F, Fut>(iter: I, f: F) -> Maybe<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Maybe<U>>,
{
    sequence_maybe_async(iter.into_iter().map(f)).await
}

/// Map each element to a pending `Outcome` and sequence the results.
///
/// ```rust
/// use wellspring::{Outcome, deferred::traverse_outcome_async};
///
/// async fn check(x: i32) -> Outcome<i32, String> {
///     if x >= 0 {
///         Outcome::success(x)
///     } else {
///         Outcome::failure(format!("{x} is negative"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(traverse_outcome_async(vec![1, 2], check).await, Outcome::success(vec![1, 2]));
/// assert_eq!(
///     traverse_outcome_async(vec![1, -2, -3], check).await,
///     Outcome::failure("-2 is negative".to_string())
/// );
/// # });
/// ```
pub async fn traverse_outcome_async<T, U, E, I, F, Fut>(iter: I, f: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Outcome<U, E>>,
{
    sequence_outcome_async(iter.into_iter().map(f)).await
}

/// Await each pending writer in turn, combining logs in source order.
pub async fn sequence_writer_async<T, L, I, Fut>(iter: I) -> Writer<Vec<T>, L>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Writer<T, L>>,
    L: Monoid,
{
    let mut values = Vec::new();
    let mut log = L::empty();
    for pending in iter {
        let (value, more) = pending.await.run();
        values.push(value);
        log = log.combine(more);
    }
    Writer::new(values, log)
}

/// Map each element to a pending writer and sequence the results.
pub async fn traverse_writer_async<T, U, L, I, F, Fut>(iter: I, f: F) -> Writer<Vec<U>, L>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Writer<U, L>>,
    L: Monoid,
{
    sequence_writer_async(iter.into_iter().map(f)).await
}

impl<T> Outcome<T, String> {
    /// Await a fallible future, capturing its error as a `Failure` message.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let ok = Outcome::attempt_async(async { "42".parse::<i32>() }).await;
    /// assert_eq!(ok, Outcome::success(42));
    ///
    /// let failed = Outcome::attempt_async(async { "x".parse::<i32>() }).await;
    /// assert!(failed.is_failure());
    /// # });
    /// ```
    pub async fn attempt_async<X, Fut>(operation: Fut) -> Self
    where
        X: Display,
        Fut: Future<Output = Result<T, X>>,
    {
        match operation.await {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(captured(error.to_string())),
        }
    }

    /// Await a future that may panic, capturing the panic as a `Failure`.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let failed: Outcome<i32> = Outcome::catch_unwind_async(async { panic!("lost connection") }).await;
    /// assert_eq!(failed, Outcome::failure("lost connection".to_string()));
    /// # });
    /// ```
    pub async fn catch_unwind_async<Fut>(operation: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        match AssertUnwindSafe(operation).catch_unwind().await {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(captured(panic_message(payload))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    async fn halve(x: i32) -> Maybe<i32> {
        if x % 2 == 0 {
            Maybe::just(x / 2)
        } else {
            Maybe::nothing()
        }
    }

    #[tokio::test]
    async fn test_maybe_map_async() {
        let result = Maybe::just(3).map_async(|x| async move { x + 1 }).await;
        assert_eq!(result, Maybe::just(4));
    }

    #[tokio::test]
    async fn test_maybe_map_async_skips_on_nothing() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing()
            .map_async(|x| {
                calls.set(calls.get() + 1);
                async move { x + 1 }
            })
            .await;
        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_maybe_bind_async() {
        assert_eq!(Maybe::just(8).bind_async(halve).await, Maybe::just(4));
        assert_eq!(Maybe::just(7).bind_async(halve).await, Maybe::nothing());
    }

    #[tokio::test]
    async fn test_outcome_bind_async_short_circuits() {
        let calls = Cell::new(0);
        let result = Outcome::<i32, &str>::failure("down")
            .bind_async(|x| {
                calls.set(calls.get() + 1);
                async move { Outcome::success(x) }
            })
            .await;
        assert_eq!(result, Outcome::failure("down"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_outcome_map_async() {
        let result = Outcome::<i32, &str>::success(2)
            .map_async(|x| async move { x * 10 })
            .await;
        assert_eq!(result, Outcome::success(20));
    }

    #[tokio::test]
    async fn test_writer_bind_async_log_order() {
        let result = Writer::entry(1, "first")
            .bind_async(|x| async move { Writer::entry(x + 1, "second") })
            .await;
        assert_eq!(result.run(), (2, vec!["first", "second"]));
    }

    #[tokio::test]
    async fn test_writer_map_async_keeps_log() {
        let result = Writer::entry(5, "kept")
            .map_async(|x| async move { x * 2 })
            .await;
        assert_eq!(result.run(), (10, vec!["kept"]));
    }

    #[tokio::test]
    async fn test_writer_bind_with_async_non_monoid_log() {
        let join = |a: String, b: String| if a.is_empty() { b } else { format!("{a}; {b}") };
        let calls = Cell::new(0);
        let result = Writer::new(4, String::new())
            .bind_with_async(
                |x| {
                    calls.set(calls.get() + 1);
                    async move { Writer::new(x + 1, "incremented".to_string()) }
                },
                join,
            )
            .await
            .bind_with_async(
                |x| async move { Writer::new(x * 10, "scaled".to_string()) },
                join,
            )
            .await
            .map_async(|x| async move { x.to_string() })
            .await;
        assert_eq!(
            result.run(),
            ("50".to_string(), "incremented; scaled".to_string())
        );
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_then_map_and_then_bind_on_pending() {
        let pending = async { Maybe::just(10) };
        let result = pending.then_map(|x| x + 2).then_bind(|x| Maybe::just(x * 2)).await;
        assert_eq!(result, Maybe::just(24));
    }

    #[tokio::test]
    async fn test_then_bind_async_on_pending_failure() {
        let pending = async { Outcome::<i32, String>::failure("timeout".to_string()) };
        let result = pending
            .then_bind_async(|x| async move { Outcome::success(x + 1) })
            .await;
        assert_eq!(result, Outcome::failure("timeout".to_string()));
    }

    #[tokio::test]
    async fn test_then_map_async_on_pending_writer() {
        let pending = async { Writer::entry(3, "loaded") };
        let result = pending
            .then_map_async(|x| async move { x * 3 })
            .then_bind(|x| Writer::entry(x, "scaled"))
            .await;
        assert_eq!(result.run(), (9, vec!["loaded", "scaled"]));
    }

    #[tokio::test]
    async fn test_sequence_outcome_async_never_polls_past_failure() {
        let polled = Cell::new(0);
        let step = |outcome: Outcome<i32, &'static str>| {
            let polled = &polled;
            async move {
                polled.set(polled.get() + 1);
                outcome
            }
        };
        let pending = vec![
            step(Outcome::success(1)),
            step(Outcome::failure("second")),
            step(Outcome::success(3)),
        ];

        let result = sequence_outcome_async(pending).await;
        assert_eq!(result, Outcome::failure("second"));
        assert_eq!(polled.get(), 2);
    }

    #[tokio::test]
    async fn test_sequence_maybe_async_nothing() {
        let pending = vec![halve(2), halve(3), halve(4)];
        assert_eq!(sequence_maybe_async(pending).await, Maybe::nothing());
    }

    #[tokio::test]
    async fn test_traverse_maybe_async_stops_calling() {
        let calls = Cell::new(0);
        let result = traverse_maybe_async(vec![2, 3, 4], |x| {
            calls.set(calls.get() + 1);
            halve(x)
        })
        .await;
        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_traverse_writer_async() {
        let result = traverse_writer_async(vec![1, 2], |x| async move {
            Writer::note(x * 2, format!("doubled {x}"))
        })
        .await;
        assert_eq!(
            result.run(),
            (
                vec![2, 4],
                vec!["doubled 1".to_string(), "doubled 2".to_string()]
            )
        );
    }

    #[tokio::test]
    async fn test_attempt_async() {
        let ok: Outcome<u8> = Outcome::attempt_async(async { "7".parse::<u8>() }).await;
        assert_eq!(ok, Outcome::success(7));

        let failed: Outcome<u8> = Outcome::attempt_async(async { "300".parse::<u8>() }).await;
        assert_eq!(
            failed,
            Outcome::failure("number too large to fit in target type".to_string())
        );
    }

    #[tokio::test]
    async fn test_catch_unwind_async() {
        let ok: Outcome<i32> = Outcome::catch_unwind_async(async { 5 }).await;
        assert_eq!(ok, Outcome::success(5));

        let failed: Outcome<i32> =
            Outcome::catch_unwind_async(async { panic!("worker {} crashed", 3) }).await;
        assert_eq!(failed, Outcome::failure("worker 3 crashed".to_string()));
    }
}
