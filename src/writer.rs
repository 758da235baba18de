//! A value paired with an accumulated log.
//!
//! `Writer<T, L>` carries a `value` and a `log`. Each `bind` runs the next step
//! on the value and appends the step's log **after** the current one, so the
//! final log always reflects the order in which steps executed. Entries are
//! never reordered or deduplicated.
//!
//! # Log combination
//!
//! The append operation is either
//!
//! - supplied explicitly with [`Writer::bind_with`], or
//! - taken from the log type's [`Semigroup`] instance with [`Writer::bind`].
//!
//! Either way it must be associative and its identity must be the empty log
//! used by [`Writer::pure`] / [`Writer::with_empty`]; otherwise the monad laws
//! do not hold.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::{TextWriter, Writer};
//!
//! fn double(x: i32) -> TextWriter<i32> {
//!     Writer::note(x * 2, format!("doubled {}", x))
//! }
//!
//! fn increment(x: i32) -> TextWriter<i32> {
//!     Writer::note(x + 1, format!("incremented {}", x))
//! }
//!
//! let (value, log) = Writer::note(5, "started").bind(double).bind(increment).run();
//! assert_eq!(value, 11);
//! assert_eq!(log, vec!["started", "doubled 5", "incremented 10"]);
//! ```

use crate::{Monoid, Semigroup};

/// A writer whose log is an ordered list of text lines.
pub type TextWriter<T> = Writer<T, Vec<String>>;

/// A value together with the log accumulated while producing it.
///
/// # Example
///
/// ```rust
/// use wellspring::Writer;
///
/// let w = Writer::entry(1, "one").bind(|x| Writer::entry(x + 1, "two"));
/// assert_eq!(w.value(), &2);
/// assert_eq!(w.log(), &vec!["one", "two"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<T, L> {
    value: T,
    log: L,
}

impl<T, L> Writer<T, L> {
    // ========== Constructors ==========

    /// Pair a value with an existing log.
    #[inline]
    pub fn new(value: T, log: L) -> Self {
        Writer { value, log }
    }

    /// Pair a value with a caller-supplied empty log.
    ///
    /// This is the `return` of the explicit-combine form: use it together
    /// with [`bind_with`](Writer::bind_with) when the log type has no
    /// [`Monoid`] instance.
    #[inline]
    pub fn with_empty(value: T, empty: L) -> Self {
        Writer { value, log: empty }
    }

    // ========== Accessors ==========

    /// The current value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The accumulated log.
    #[inline]
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Split into `(value, log)`.
    #[inline]
    pub fn run(self) -> (T, L) {
        (self.value, self.log)
    }

    /// Discard the log.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Discard the value.
    #[inline]
    pub fn into_log(self) -> L {
        self.log
    }

    // ========== Transformations ==========

    /// Transform the value. The log is moved over untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> U,
    {
        Writer {
            value: f(self.value),
            log: self.log,
        }
    }

    /// Chain a step using an explicit log combination.
    ///
    /// `combine` receives the current log first and the step's log second.
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// let join = |a: String, b: String| if a.is_empty() { b } else { format!("{a}; {b}") };
    ///
    /// let w = Writer::with_empty(2, String::new())
    ///     .bind_with(|x| Writer::new(x * 3, "tripled".to_string()), join)
    ///     .bind_with(|x| Writer::new(x - 1, "decremented".to_string()), join);
    ///
    /// assert_eq!(w.run(), (5, "tripled; decremented".to_string()));
    /// ```
    #[inline]
    pub fn bind_with<U, F, C>(self, f: F, combine: C) -> Writer<U, L>
    where
        F: FnOnce(T) -> Writer<U, L>,
        C: FnOnce(L, L) -> L,
    {
        let Writer { value, log } = self;
        let next = f(value);
        Writer {
            value: next.value,
            log: combine(log, next.log),
        }
    }

    /// Rewrite the accumulated log.
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// let w = Writer::entries(1, vec!["debug: a", "info: b"])
    ///     .censor(|log| log.into_iter().filter(|l| !l.starts_with("debug")).collect());
    /// assert_eq!(w.log(), &vec!["info: b"]);
    /// ```
    #[inline]
    pub fn censor<F>(self, f: F) -> Writer<T, L>
    where
        F: FnOnce(L) -> L,
    {
        Writer {
            value: self.value,
            log: f(self.log),
        }
    }

    /// Expose a copy of the log next to the value.
    #[inline]
    pub fn listen(self) -> Writer<(T, L), L>
    where
        L: Clone,
    {
        Writer {
            value: (self.value, self.log.clone()),
            log: self.log,
        }
    }

    /// Run a side effect on the value and return `self` unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.value);
        self
    }
}

impl<T, L: Semigroup> Writer<T, L> {
    /// Chain a step, appending its log with [`Semigroup::combine`].
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// let w = Writer::entry(1, "A")
    ///     .bind(|x| Writer::entry(x + 1, "B"))
    ///     .bind(|x| Writer::entry(x + 1, "C"));
    /// assert_eq!(w.run(), (3, vec!["A", "B", "C"]));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Writer<U, L>,
    {
        self.bind_with(f, L::combine)
    }

    /// Alias for [`bind`](Writer::bind).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Writer<U, L>
    where
        F: FnOnce(T) -> Writer<U, L>,
    {
        self.bind(f)
    }

    /// Sequence another writer, keeping its value and both logs.
    #[inline]
    pub fn then<U>(self, next: Writer<U, L>) -> Writer<U, L> {
        self.bind(|_| next)
    }

    /// Combine two writers' values, appending `other`'s log after this one.
    #[inline]
    pub fn zip<U>(self, other: Writer<U, L>) -> Writer<(T, U), L> {
        self.bind(|a| other.map(|b| (a, b)))
    }
}

impl<T, L: Monoid> Writer<T, L> {
    /// Wrap a value with an empty log.
    #[inline]
    pub fn pure(value: T) -> Self {
        Writer {
            value,
            log: L::empty(),
        }
    }
}

impl<L> Writer<(), L> {
    /// A writer that only contributes a log.
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// let w = Writer::tell(vec!["audit: login"]).then(Writer::entry(7, "audit: fetch"));
    /// assert_eq!(w.run(), (7, vec!["audit: login", "audit: fetch"]));
    /// ```
    #[inline]
    pub fn tell(log: L) -> Self {
        Writer { value: (), log }
    }
}

impl<T, I> Writer<T, Vec<I>> {
    /// Pair a value with a single log entry.
    #[inline]
    pub fn entry(value: T, item: I) -> Self {
        Writer {
            value,
            log: vec![item],
        }
    }

    /// Pair a value with several log entries, kept in the given order.
    #[inline]
    pub fn entries(value: T, items: impl IntoIterator<Item = I>) -> Self {
        Writer {
            value,
            log: items.into_iter().collect(),
        }
    }
}

impl<T> Writer<T, Vec<String>> {
    /// Pair a value with one text line.
    #[inline]
    pub fn note(value: T, message: impl Into<String>) -> Self {
        Writer::entry(value, message.into())
    }

    /// Append one text line to the log.
    ///
    /// ```rust
    /// use wellspring::Writer;
    ///
    /// let w = Writer::note(1, "loaded").log_line("validated");
    /// assert_eq!(w.log(), &vec!["loaded".to_string(), "validated".to_string()]);
    /// ```
    #[inline]
    pub fn log_line(mut self, message: impl Into<String>) -> Self {
        self.log.push(message.into());
        self
    }
}

impl<T, L> From<(T, L)> for Writer<T, L> {
    fn from((value, log): (T, L)) -> Self {
        Writer::new(value, log)
    }
}
