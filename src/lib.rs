//! # Wellspring
//!
//! Small, law-abiding wrappers for composing computations.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Outcome`]: a success or a failure (railway composition)
//! - [`Writer`]: a value paired with an accumulated log
//!
//! All three share one chaining vocabulary ([`Bindable`]), the same
//! collection combinators ([`traverse`]) and deferred counterparts for values
//! produced by a `Future` ([`deferred`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use wellspring::{Maybe, Outcome, Writer};
//!
//! // Absence short-circuits
//! let port = Maybe::just("8080")
//!     .bind(|s| s.parse::<u16>().ok().into())
//!     .filter(|p| *p > 1024)
//!     .unwrap_or(8000);
//! assert_eq!(port, 8080);
//!
//! // First failure wins
//! let total: Outcome<i32> = Outcome::attempt(|| "40".parse::<i32>())
//!     .bind(|n| Outcome::attempt(|| "2".parse::<i32>()).map(|m| n + m));
//! assert_eq!(total, Outcome::success(42));
//!
//! // Logs accumulate in call order
//! let (value, log) = Writer::note(2, "start")
//!     .bind(|x| Writer::note(x * 10, "scaled"))
//!     .run();
//! assert_eq!(value, 20);
//! assert_eq!(log, vec!["start", "scaled"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: [`tracing::TraceExt`] and debug events at fault-capture points
//! - `serde`: `Serialize`/`Deserialize` for the wrappers and monoid newtypes
//! - `proptest`: `Arbitrary` implementations in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bind;
pub mod compose;
pub mod context;
pub mod deferred;
pub mod maybe;
pub mod monoid;
pub mod outcome;
pub mod semigroup;
pub mod testing;
pub mod traverse;
pub mod writer;

#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports
pub use bind::Bindable;
pub use context::ContextError;
pub use deferred::{AsyncBind, DeferredExt};
pub use maybe::Maybe;
pub use monoid::Monoid;
pub use outcome::Outcome;
pub use semigroup::Semigroup;
pub use writer::{TextWriter, Writer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bind::Bindable;
    pub use crate::context::ContextError;
    pub use crate::deferred::{AsyncBind, DeferredExt};
    pub use crate::maybe::Maybe;
    pub use crate::monoid::{Monoid, Product, Sum};
    pub use crate::outcome::Outcome;
    pub use crate::semigroup::Semigroup;
    #[cfg(feature = "tracing")]
    pub use crate::tracing::TraceExt;
    pub use crate::writer::{TextWriter, Writer};
}
