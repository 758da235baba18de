//! Success/failure values for railway-style composition.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. `map` and `bind`
//! run only on the success track; the first `Failure` produced wins and every
//! later step is skipped, regardless of chain length.
//!
//! The error type defaults to `String`, so `Outcome<T>` is the text-error
//! specialization used by the fault-capture constructors.
//!
//! # Capturing faults
//!
//! [`Outcome::attempt`] and [`Outcome::catch_unwind`] are the only places
//! where a fault becomes data. A closure passed to `map`, `bind` or any other
//! combinator that panics is not intercepted; the panic propagates to the
//! caller as usual.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::Outcome;
//!
//! fn parse(s: &str) -> Outcome<i32> {
//!     Outcome::attempt(|| s.parse::<i32>())
//! }
//!
//! fn non_negative(x: i32) -> Outcome<i32> {
//!     if x >= 0 {
//!         Outcome::success(x)
//!     } else {
//!         Outcome::failure(format!("{} is negative", x))
//!     }
//! }
//!
//! assert_eq!(parse("12").bind(non_negative).map(|x| x * 2), Outcome::success(24));
//! assert_eq!(
//!     parse("-3").bind(non_negative),
//!     Outcome::failure("-3 is negative".to_string())
//! );
//! assert!(parse("x").bind(non_negative).is_failure());
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crate::{ContextError, Maybe};

/// The result of a computation: a value or an error.
///
/// # Example
///
/// ```rust
/// use wellspring::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(1);
/// let failed: Outcome<i32, &str> = Outcome::failure("boom");
///
/// assert_eq!(ok.fold(|v| v.to_string(), |e| e.to_string()), "1");
/// assert_eq!(failed.fold(|v| v.to_string(), |e| e.to_string()), "boom");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = String> {
    /// The computation produced a value
    Success(T),
    /// The computation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Convert from a standard [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value. Failures pass through unchanged.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(ok.map(|x| x + 1), Outcome::success(3));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("e");
    /// assert_eq!(failed.map(|x| x + 1), Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error. Successes pass through unchanged.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let failed: Outcome<i32, i32> = Outcome::failure(404);
    /// assert_eq!(failed.map_error(|code| format!("status {}", code)), Outcome::failure("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Transform whichever side is present.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, on_success: F, on_failure: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(on_success(value)),
            Outcome::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Chain a step that may fail.
    ///
    /// A `Failure` short-circuits without invoking `f`.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let checked_div = |d: i32| move |n: i32| {
    ///     if d == 0 { Outcome::failure("division by zero") } else { Outcome::success(n / d) }
    /// };
    ///
    /// assert_eq!(Outcome::success(20).bind(checked_div(2)).bind(checked_div(5)), Outcome::success(2));
    /// assert_eq!(Outcome::success(20).bind(checked_div(0)).bind(checked_div(5)), Outcome::failure("division by zero"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`bind`](Outcome::bind).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.bind(f)
    }

    /// Bind, then combine the input with the bound value.
    ///
    /// Equivalent to `self.bind(|x| selector(&x).map(|y| project(x, y)))`.
    /// `selector` runs exactly once per successful input.
    #[inline]
    pub fn bind_project<U, R, S, P>(self, selector: S, project: P) -> Outcome<R, E>
    where
        S: FnOnce(&T) -> Outcome<U, E>,
        P: FnOnce(T, U) -> R,
    {
        self.bind(|x| {
            let selected = selector(&x);
            selected.map(|y| project(x, y))
        })
    }

    /// Apply a wrapped function to the wrapped value.
    ///
    /// The operand's failure takes precedence over the function's.
    #[inline]
    pub fn apply<U, F>(self, f: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match (self, f) {
            (Outcome::Success(value), Outcome::Success(f)) => Outcome::Success(f(value)),
            (Outcome::Failure(error), _) => Outcome::Failure(error),
            (Outcome::Success(_), Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Pair two successes, keeping the first failure.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.bind(|a| other.map(|b| (a, b)))
    }

    /// Fail with `error` unless the predicate holds for the success value.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let adult = |age: i32| Outcome::<i32, &str>::success(age).ensure(|a| *a >= 18, "too young");
    /// assert_eq!(adult(30), Outcome::success(30));
    /// assert_eq!(adult(12), Outcome::failure("too young"));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(error)
                }
            }
            Outcome::Failure(earlier) => Outcome::Failure(earlier),
        }
    }

    /// Run a side effect on the success value and return `self` unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run a side effect on the error and return `self` unchanged.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    // ========== Recovery ==========

    /// Replace a failure with the outcome of `recovery`.
    ///
    /// Successes pass through without invoking `recovery`. Retry and fallback
    /// chains are built from repeated `or_else` calls.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let primary: Outcome<&str, &str> = Outcome::failure("primary down");
    /// let value: Outcome<&str, &str> = primary
    ///     .or_else(|_| Outcome::<&str, &str>::failure("replica down"))
    ///     .or_else(|_| Outcome::success("cached"));
    /// assert_eq!(value, Outcome::success("cached"));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, recovery: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => recovery(error),
        }
    }

    // ========== Elimination ==========

    /// Collapse both tracks into one value. Exactly one branch runs.
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Side-effecting elimination. Exactly one branch runs.
    #[inline]
    pub fn match_with<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(E),
    {
        self.fold(on_success, on_failure)
    }

    /// Extract the value or fall back to `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Extract the value or compute a fallback from the error.
    ///
    /// The factory runs only for `Failure`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Extract the value, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: std::fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {:?}", error)
            }
        }
    }

    /// Extract the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: std::fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {:?}", value)
            }
            Outcome::Failure(error) => error,
        }
    }

    // ========== Conversions ==========

    /// Keep the success value, discarding any error.
    ///
    /// ```rust
    /// use wellspring::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(5).to_maybe(), Maybe::just(5));
    /// assert!(Outcome::<i32, &str>::failure("e").to_maybe().is_nothing());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Just(value),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    /// Keep the error, discarding any success value.
    #[inline]
    pub fn error(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Nothing,
            Outcome::Failure(error) => Maybe::Just(error),
        }
    }

    /// Convert to a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Wrap the error in a [`ContextError`] carrying `msg`.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::failure("connection refused")
    ///     .context("loading profile")
    ///     .context_chain("rendering dashboard");
    ///
    /// let error = failed.unwrap_failure();
    /// assert_eq!(error.inner(), &"connection refused");
    /// assert_eq!(error.context_trail(), &["loading profile", "rendering dashboard"]);
    /// ```
    #[inline]
    pub fn context(self, msg: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_error(|error| ContextError::new(error).context(msg))
    }
}

impl<T, E> Outcome<T, ContextError<E>> {
    /// Add another layer to an existing context trail.
    #[inline]
    pub fn context_chain(self, msg: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_error(|error| error.context(msg))
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.bind(|inner| inner)
    }
}

impl<T> Outcome<T, String> {
    /// Run a fallible operation, converting its error into text.
    ///
    /// `Ok(v)` becomes `Success(v)`; `Err(e)` becomes `Failure(e.to_string())`.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// assert_eq!(Outcome::attempt(|| "123".parse::<i32>()), Outcome::success(123));
    ///
    /// let failed = Outcome::attempt(|| "x".parse::<i32>());
    /// assert!(!failed.unwrap_failure().is_empty());
    /// ```
    pub fn attempt<X, F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        X: Display,
    {
        match operation() {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(captured(error.to_string())),
        }
    }

    /// Run an operation that may panic, converting a panic into a failure.
    ///
    /// The failure carries the panic message. Payloads that are neither
    /// `&str` nor `String` are described generically.
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// assert_eq!(Outcome::catch_unwind(|| 2 + 2), Outcome::success(4));
    ///
    /// let failed = Outcome::<i32>::catch_unwind(|| panic!("disk on fire"));
    /// assert_eq!(failed, Outcome::failure("disk on fire".to_string()));
    /// ```
    pub fn catch_unwind<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(captured(panic_message(payload))),
        }
    }
}

/// Describe a panic payload as text.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "operation panicked with a non-text payload".to_string(),
        },
    }
}

/// Record a fault crossing into the data layer.
pub(crate) fn captured(message: String) -> String {
    #[cfg(feature = "tracing")]
    tracing::debug!(fault = %message, "captured fault as failure");
    message
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}
