//! Overlay environment variables onto typed configuration defaults.
//!
//! A configuration struct derives [`Describe`] and tags the fields that may be
//! supplied externally with `#[c12(env = "KEY")]`. The caller builds a default
//! instance, then asks the engine for a copy with every bound field replaced
//! by the matching variable when that variable is present and non-blank.
//!
//! ```rust
//! use config12::{Describe, lookup};
//! use std::collections::HashMap;
//!
//! #[derive(Clone, Debug, Describe)]
//! struct Settings {
//!     #[c12(env = "PORT")]
//!     port: u16,
//!     #[c12(env = "LOG_REQUESTS")]
//!     log_requests: bool,
//!     site_name: String,
//! }
//!
//! let defaults = Settings {
//!     port: 3000,
//!     log_requests: false,
//!     site_name: "demo".into(),
//! };
//! let env = HashMap::from([("PORT".to_owned(), "8080".to_owned())]);
//! let settings = config12::overlay(&defaults, &env)?;
//! assert_eq!(settings.port, 8080);
//! assert!(!settings.log_requests);
//! # Ok::<(), config12::OverlayError>(())
//! ```
//!
//! Only `String`, the primitive integer types and `bool` are overlaid. Fields
//! of any other type keep their default even when bound.

extern crate self as config12;

pub use config12_macros::Describe;

mod bindings;
mod descriptor;
mod error;
pub mod lookup;
mod overlay;
pub mod policy;
mod shape;

pub use bindings::{BindingDoc, bindings};
pub use descriptor::{
    Accessor, BooleanSetter, Describe, FieldDescriptor, FieldKind, IntegerSetter, RecordDescriptor,
    Shape, StringSetter, ValueKind,
};
pub use error::{AggregatedErrors, FieldParseError, OverlayError, OverlayResult};
pub use lookup::{Lookup, ProcessEnv};
pub use overlay::{Overlaid, Overlay, ParsePolicy, overlay};

/// Overlays the process environment onto `defaults`.
///
/// Parse failures abort the whole call; see [`ParsePolicy::FailFast`].
///
/// # Errors
///
/// Returns [`OverlayError::NotARecord`] when `R` is not a struct with named
/// fields, and [`OverlayError::FieldParse`] when a bound integer field holds a
/// value that does not parse.
pub fn from_environment<R: Describe>(defaults: &R) -> OverlayResult<R> {
    overlay(defaults, ProcessEnv)
}
