//! Context error handling with error trails
//!
//! `ContextError` wraps the error of a failed [`Outcome`](crate::Outcome) and
//! accumulates context messages as the failure travels outward through a
//! railway chain. The trail reads innermost-first.
//!
//! # Examples
//!
//! ```
//! use wellspring::{ContextError, Outcome};
//!
//! fn read_port(raw: &str) -> Outcome<u16, ContextError<String>> {
//!     Outcome::attempt(|| raw.parse::<u16>()).context("parsing port")
//! }
//!
//! let failed = read_port("http").context_chain("loading server settings");
//! let error = failed.unwrap_failure();
//!
//! assert_eq!(error.context_trail(), &["parsing port", "loading server settings"]);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A failure plus the trail of steps it passed through on the way out.
///
/// ```
/// use wellspring::ContextError;
///
/// let err = ContextError::new("connection refused")
///     .context("connecting to database")
///     .context("initializing user service");
///
/// assert_eq!(
///     err.to_string(),
///     "Error: connection refused\n  -> connecting to database\n  -> initializing user service"
/// );
/// assert_eq!(err.outermost(), Some("initializing user service"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextError<E> {
    cause: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Start a trail at `cause`.
    pub fn new(cause: E) -> Self {
        Self::from(cause)
    }

    /// Record one more step on the way out.
    pub fn context(mut self, step: impl Into<String>) -> Self {
        self.trail.push(step.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.cause
    }

    /// Consume the wrapper, returning the wrapped error.
    pub fn into_inner(self) -> E {
        self.cause
    }

    /// Steps in the order they were recorded, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.trail
    }

    /// The most recently recorded step, if any.
    pub fn outermost(&self) -> Option<&str> {
        self.trail.last().map(String::as_str)
    }

    /// Number of recorded steps.
    pub fn depth(&self) -> usize {
        self.trail.len()
    }

    /// Transform the wrapped error, keeping the trail.
    pub fn map_inner<E2, F>(self, f: F) -> ContextError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        ContextError {
            cause: f(self.cause),
            trail: self.trail,
        }
    }
}

impl<E> From<E> for ContextError<E> {
    fn from(cause: E) -> Self {
        ContextError {
            cause,
            trail: Vec::new(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.cause)?;
        self.trail
            .iter()
            .try_for_each(|step| write!(f, "\n  -> {step}"))
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}
