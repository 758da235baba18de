//! An optional value that composes through `map`/`bind` chains.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Absence carries no diagnostic
//! payload; every operation is total and `Nothing` short-circuits every step
//! that would otherwise receive a value.
//!
//! # Maybe vs Option
//!
//! `Maybe` converts losslessly to and from [`Option`] (`From`/`Into`). It exists
//! so the same chaining vocabulary (`bind`, `apply`, `fold`, `filter`) and the
//! same [`Bindable`](crate::Bindable) and [`AsyncBind`](crate::AsyncBind)
//! implementations are available for optional values, results and writers.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::Maybe;
//!
//! fn parse(s: &str) -> Maybe<i32> {
//!     s.parse().ok().into()
//! }
//!
//! let described = parse("21")
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 10)
//!     .fold(|x| format!("got {}", x), || "nothing".to_string());
//! assert_eq!(described, "got 42");
//!
//! let described = parse("oops")
//!     .map(|x| x * 2)
//!     .fold(|x| format!("got {}", x), || "nothing".to_string());
//! assert_eq!(described, "nothing");
//! ```

use crate::Outcome;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Example
///
/// ```rust
/// use wellspring::Maybe;
///
/// let present = Maybe::just(5);
/// let absent: Maybe<i32> = Maybe::nothing();
///
/// assert_eq!(present.bind(|x| Maybe::just(x + 1)), Maybe::just(6));
/// assert_eq!(absent.bind(|x| Maybe::just(x + 1)), Maybe::nothing());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value
    Just(T),
    /// No value
    Nothing,
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a present value.
    #[inline]
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Create an absent value.
    #[inline]
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Convert from a standard [`Option`].
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Returns `true` if a value is present and equal to `candidate`.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// assert!(Maybe::just(3).contains(&3));
    /// assert!(!Maybe::<i32>::nothing().contains(&3));
    /// ```
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Maybe::Just(value) => value == candidate,
            Maybe::Nothing => false,
        }
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    // ========== Transformations ==========

    /// Transform the value if present.
    ///
    /// `f` is never invoked for `Nothing`.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|x| x * 2), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// `Nothing` short-circuits without invoking `f`.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() };
    ///
    /// assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::nothing());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`bind`](Maybe::bind).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(f)
    }

    /// Bind, then combine the input with the bound value.
    ///
    /// Equivalent to `self.bind(|x| selector(&x).map(|y| project(x, y)))`,
    /// which is how multi-clause chains keep earlier values in scope.
    /// `selector` runs exactly once per present input.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// let lookup_age = |name: &&str| if *name == "ada" { Maybe::just(36) } else { Maybe::nothing() };
    ///
    /// let greeting = Maybe::just("ada").bind_project(lookup_age, |name, age| format!("{name} is {age}"));
    /// assert_eq!(greeting, Maybe::just("ada is 36".to_string()));
    ///
    /// let missing = Maybe::just("bob").bind_project(lookup_age, |name, age| format!("{name} is {age}"));
    /// assert_eq!(missing, Maybe::nothing());
    /// ```
    #[inline]
    pub fn bind_project<U, R, S, P>(self, selector: S, project: P) -> Maybe<R>
    where
        S: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> R,
    {
        self.bind(|x| {
            let selected = selector(&x);
            selected.map(|y| project(x, y))
        })
    }

    /// Apply a wrapped function to the wrapped value.
    ///
    /// The result is present only if both are present.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// let add_one = Maybe::just(|x: i32| x + 1);
    /// assert_eq!(Maybe::just(1).apply(add_one), Maybe::just(2));
    /// assert_eq!(Maybe::nothing().apply(add_one), Maybe::nothing());
    /// assert_eq!(Maybe::just(1).apply(Maybe::<fn(i32) -> i32>::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    pub fn apply<U, F>(self, f: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, f) {
            (Maybe::Just(value), Maybe::Just(f)) => Maybe::Just(f(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Keep the value only if the predicate holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) => {
                if predicate(&value) {
                    Maybe::Just(value)
                } else {
                    Maybe::Nothing
                }
            }
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Pair two present values.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just((a, b)),
            _ => Maybe::Nothing,
        }
    }

    /// Run a side effect on the present value and return `self` unchanged.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::just(3).tap(|x| seen.push(*x)).map(|x| x + 1);
    /// assert_eq!(value, Maybe::just(4));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Just(value) = &self {
            f(value);
        }
        self
    }

    // ========== Alternatives ==========

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => other,
        }
    }

    /// Return `self` if present, otherwise compute an alternative.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => f(),
        }
    }

    // ========== Elimination ==========

    /// Collapse both variants into one value. Exactly one branch runs.
    ///
    /// ```rust
    /// use wellspring::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).fold(|x| x * 10, || -1), 20);
    /// assert_eq!(Maybe::<i32>::nothing().fold(|x| x * 10, || -1), -1);
    /// ```
    #[inline]
    pub fn fold<R, S, N>(self, on_just: S, on_nothing: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Maybe::Just(value) => on_just(value),
            Maybe::Nothing => on_nothing(),
        }
    }

    /// Side-effecting elimination. Exactly one branch runs.
    #[inline]
    pub fn match_with<S, N>(self, on_just: S, on_nothing: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.fold(on_just, on_nothing)
    }

    /// Extract the value or fall back to `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Extract the value or compute a fallback.
    ///
    /// The factory runs only for `Nothing`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => f(),
        }
    }

    /// Extract the value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Extract the value, panicking if absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Extract the value, panicking with `msg` if absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => panic!("{}", msg),
        }
    }

    // ========== Conversions ==========

    /// Convert to a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Convert to an [`Outcome`], using `error` for `Nothing`.
    ///
    /// ```rust
    /// use wellspring::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::just(1).ok_or("missing"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::nothing().ok_or("missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Just(value) => Outcome::Success(value),
            Maybe::Nothing => Outcome::Failure(error),
        }
    }

    /// Convert to an [`Outcome`], computing the error only for `Nothing`.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Just(value) => Outcome::Success(value),
            Maybe::Nothing => Outcome::Failure(f()),
        }
    }

    /// Iterate over the value: one element for `Just`, none for `Nothing`.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
