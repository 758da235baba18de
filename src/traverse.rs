//! Traverse and sequence utilities for collections of wrapped values
//!
//! - **`sequence_*`**: turn a collection of wrappers into a wrapper of a collection
//!   - `Vec<Maybe<T>>` → `Maybe<Vec<T>>`
//!   - `Vec<Outcome<T, E>>` → `Outcome<Vec<T>, E>`
//!   - `Vec<Writer<T, L>>` → `Writer<Vec<T>, L>`
//! - **`traverse_*`**: map a function over a collection and sequence the results.
//!   Defined as `sequence(iter.map(f))`, so the function is never called past
//!   the first `Nothing` or `Failure`.
//! - **`choose`**: keep only the present results of a chooser, lazily.
//!
//! # Examples
//!
//! ```
//! use wellspring::Outcome;
//! use wellspring::traverse::{choose, traverse_outcome};
//!
//! let parsed: Vec<i32> = choose(["1", "2", "x", "4"], |s| s.parse::<i32>().ok().into()).collect();
//! assert_eq!(parsed, vec![1, 2, 4]);
//!
//! let all = traverse_outcome(["1", "2", "3"], |s| Outcome::attempt(|| s.parse::<i32>()));
//! assert_eq!(all, Outcome::success(vec![1, 2, 3]));
//! ```

use crate::{Maybe, Monoid, Outcome, Writer};

/// Sequence a collection of `Maybe`s.
///
/// `Just` with every value when all are present, otherwise `Nothing`.
/// Elements after the first `Nothing` are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use wellspring::{Maybe, traverse::sequence_maybe};
///
/// assert_eq!(
///     sequence_maybe(vec![Maybe::just(1), Maybe::just(2)]),
///     Maybe::just(vec![1, 2])
/// );
/// assert_eq!(
///     sequence_maybe(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)]),
///     Maybe::nothing()
/// );
/// ```
pub fn sequence_maybe<T, I>(iter: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    iter.into_iter()
        .map(Maybe::into_option)
        .collect::<Option<Vec<T>>>()
        .into()
}

/// Sequence a collection of `Outcome`s.
///
/// `Success` with every value, or the first `Failure` encountered.
///
/// # Examples
///
/// ```
/// use wellspring::{Outcome, traverse::sequence_outcome};
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![
///     Outcome::success(1),
///     Outcome::failure("first"),
///     Outcome::failure("second"),
/// ];
/// assert_eq!(sequence_outcome(outcomes), Outcome::failure("first"));
/// ```
pub fn sequence_outcome<T, E, I>(iter: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    iter.into_iter()
        .map(Outcome::into_result)
        .collect::<Result<Vec<T>, E>>()
        .into()
}

/// Map each element to a `Maybe` and sequence the results.
pub fn traverse_maybe<T, U, I, F>(iter: I, f: F) -> Maybe<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    sequence_maybe(iter.into_iter().map(f))
}

/// Map each element to an `Outcome` and sequence the results.
///
/// # Examples
///
/// ```
/// use wellspring::{Outcome, traverse::traverse_outcome};
///
/// fn positive(x: i32) -> Outcome<i32, String> {
///     if x > 0 {
///         Outcome::success(x)
///     } else {
///         Outcome::failure(format!("{} is not positive", x))
///     }
/// }
///
/// assert_eq!(traverse_outcome(vec![1, 2], positive), Outcome::success(vec![1, 2]));
/// assert_eq!(
///     traverse_outcome(vec![1, -2, -3], positive),
///     Outcome::failure("-2 is not positive".to_string())
/// );
/// ```
pub fn traverse_outcome<T, U, E, I, F>(iter: I, f: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U, E>,
{
    sequence_outcome(iter.into_iter().map(f))
}

/// Lazily keep the present results of `chooser`, in source order.
///
/// Safe on infinite sources as long as the consumer stops pulling.
///
/// # Examples
///
/// ```
/// use wellspring::{Maybe, traverse::choose};
///
/// let evens: Vec<u32> = choose(1.., |n| if n % 2 == 0 { Maybe::just(n) } else { Maybe::nothing() })
///     .take(3)
///     .collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn choose<T, U, I, F>(iter: I, mut chooser: F) -> impl Iterator<Item = U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    iter.into_iter()
        .filter_map(move |item| chooser(item).into_option())
}

/// Sequence a collection of writers, combining their logs in source order.
///
/// # Examples
///
/// ```
/// use wellspring::{Writer, traverse::sequence_writer};
///
/// let writers = vec![Writer::entry(1, "one"), Writer::entry(2, "two")];
/// assert_eq!(sequence_writer(writers).run(), (vec![1, 2], vec!["one", "two"]));
/// ```
pub fn sequence_writer<T, L, I>(iter: I) -> Writer<Vec<T>, L>
where
    I: IntoIterator<Item = Writer<T, L>>,
    L: Monoid,
{
    let iter = iter.into_iter();
    let init = Writer::pure(Vec::with_capacity(iter.size_hint().0));
    iter.fold(init, |acc, writer| {
        acc.zip(writer).map(|(mut values, value)| {
            values.push(value);
            values
        })
    })
}

/// Map each element to a writer and sequence the results.
pub fn traverse_writer<T, U, L, I, F>(iter: I, f: F) -> Writer<Vec<U>, L>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Writer<U, L>,
    L: Monoid,
{
    sequence_writer(iter.into_iter().map(f))
}

/// Split outcomes into successes and failures, preserving order within each.
///
/// # Examples
///
/// ```
/// use wellspring::{Outcome, traverse::partition_outcomes};
///
/// let (ok, failed) = partition_outcomes(vec![
///     Outcome::success(1),
///     Outcome::failure("bad"),
///     Outcome::success(3),
/// ]);
/// assert_eq!(ok, vec![1, 3]);
/// assert_eq!(failed, vec!["bad"]);
/// ```
pub fn partition_outcomes<T, E, I>(iter: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for outcome in iter {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(error) => failures.push(error),
        }
    }
    (successes, failures)
}
