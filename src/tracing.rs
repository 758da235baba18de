//! Diagnostic taps for wrappers.
//!
//! [`TraceExt::traced`] emits a `tracing` event describing the active
//! variant and hands the value back unchanged, so it can sit anywhere in a
//! chain. Feature-gated behind `#[cfg(feature = "tracing")]`.
//!
//! | Value | Level |
//! |-------|-------|
//! | `Just` / `Success` / `Writer` | `DEBUG` |
//! | `Nothing` | `DEBUG` |
//! | `Failure` | `WARN` |
//!
//! # Example
//!
//! ```rust
//! use wellspring::{Outcome, tracing::TraceExt};
//!
//! let port = Outcome::attempt(|| "8080".parse::<u16>())
//!     .traced("parse port")
//!     .map(|p| p + 1);
//! assert_eq!(port, Outcome::success(8081));
//! ```
//!
//! Deferred chains can be wrapped in spans with
//! [`Instrument`](::tracing::Instrument),
//! since every deferred operation returns a plain `Future`.

use std::fmt::{Debug, Display};

use crate::{Maybe, Outcome, Writer};

/// Emit a diagnostic event for a wrapper without changing it.
pub trait TraceExt: Sized {
    /// Record the active variant under `label` and return `self`.
    fn traced(self, label: &str) -> Self;
}

impl<T: Debug> TraceExt for Maybe<T> {
    fn traced(self, label: &str) -> Self {
        match &self {
            Maybe::Just(value) => ::tracing::debug!(label, value = ?value, "just"),
            Maybe::Nothing => ::tracing::debug!(label, "nothing"),
        }
        self
    }
}

impl<T: Debug, E: Display> TraceExt for Outcome<T, E> {
    fn traced(self, label: &str) -> Self {
        match &self {
            Outcome::Success(value) => ::tracing::debug!(label, value = ?value, "success"),
            Outcome::Failure(error) => ::tracing::warn!(label, error = %error, "failure"),
        }
        self
    }
}

impl<T: Debug, I> TraceExt for Writer<T, Vec<I>> {
    fn traced(self, label: &str) -> Self {
        ::tracing::debug!(
            label,
            value = ?self.value(),
            entries = self.log().len(),
            "writer"
        );
        self
    }
}
