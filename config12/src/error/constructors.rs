//! Constructors and inspection helpers for `OverlayError`.

use super::{AggregatedErrors, FieldParseError, OverlayError};
use crate::ValueKind;

impl OverlayError {
    /// Report that `R` is not a record.
    #[must_use]
    pub fn not_a_record<R>(kind: ValueKind) -> Self {
        Self::NotARecord {
            type_name: std::any::type_name::<R>(),
            kind,
        }
    }

    /// Tries to build an [`OverlayError`] from collected parse failures.
    ///
    /// Returns:
    /// * `None` when no errors are supplied;
    /// * [`Self::FieldParse`] for exactly one error; and
    /// * [`Self::Aggregate`] combining every error for two or more inputs.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = FieldParseError>,
    {
        let mut collected: Vec<FieldParseError> = errors.into_iter().collect();
        match collected.len() {
            0 => None,
            1 => collected.pop().map(Self::FieldParse),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(collected)))),
        }
    }

    /// Parse failures carried by this error, in field order.
    ///
    /// # Examples
    ///
    /// ```
    /// use config12::{Describe, lookup};
    ///
    /// #[derive(Clone, Describe)]
    /// struct Server {
    ///     #[c12(env = "PORT")]
    ///     port: u16,
    /// }
    ///
    /// let env = lookup::from_fn(|_| Some("eighty".to_owned()));
    /// let Err(err) = config12::overlay(&Server { port: 80 }, env) else {
    ///     panic!("expected a parse failure");
    /// };
    /// let keys: Vec<_> = err.parse_errors().map(|e| e.external_key.as_str()).collect();
    /// assert_eq!(keys, ["PORT"]);
    /// ```
    pub fn parse_errors(&self) -> impl Iterator<Item = &FieldParseError> {
        let errors: &[FieldParseError] = match self {
            Self::FieldParse(err) => std::slice::from_ref(err),
            Self::Aggregate(agg) => agg.iter().as_slice(),
            Self::NotARecord { .. } => &[],
        };
        errors.iter()
    }
}

impl FieldParseError {
    /// Record a failed parse of `raw_value` read from `external_key`.
    #[must_use]
    pub const fn new(
        field: &'static str,
        external_key: String,
        raw_value: String,
        source: std::num::ParseIntError,
    ) -> Self {
        Self {
            field,
            external_key,
            raw_value,
            source,
        }
    }
}
