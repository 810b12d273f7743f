//! Primary error enum for overlay failures.

use std::num::ParseIntError;

use thiserror::Error;

use super::AggregatedErrors;
use crate::ValueKind;

/// Convenience alias for results returned by the engine.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors that can occur while overlaying external values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OverlayError {
    /// The defaults were not a struct with named fields.
    #[error("expected a struct with named fields, got {kind} `{type_name}`")]
    NotARecord {
        /// Rust type name of the rejected value.
        type_name: &'static str,
        /// Category of the rejected value.
        kind: ValueKind,
    },

    /// A bound integer field held a value that does not parse.
    #[error(transparent)]
    FieldParse(#[from] FieldParseError),

    /// Several bound fields failed to parse.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

/// An external value that could not be parsed into its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected integer for {external_key} (field `{field}`), got {raw_value:?}")]
pub struct FieldParseError {
    /// Name of the field being overlaid.
    pub field: &'static str,
    /// External key the value was read from, including any prefix.
    pub external_key: String,
    /// The value exactly as the lookup returned it.
    pub raw_value: String,
    /// Underlying integer parse failure.
    #[source]
    pub source: ParseIntError,
}
