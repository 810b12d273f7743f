//! Aggregation container and iteration support for parse failures.

use std::{error::Error, fmt};

use super::FieldParseError;

/// Parse failures collected across a single overlay.
///
/// # Examples
///
/// ```
/// use config12::{Describe, OverlayError, Overlay, ParsePolicy, lookup};
///
/// #[derive(Clone, Describe)]
/// struct Limits {
///     #[c12(env = "MIN")]
///     min: i32,
///     #[c12(env = "MAX")]
///     max: i32,
/// }
///
/// let bad = lookup::from_fn(|_| Some("lots".to_owned()));
/// let err = Overlay::new(bad)
///     .policy(ParsePolicy::Collect)
///     .apply(&Limits { min: 0, max: 10 })
///     .err();
/// let Some(OverlayError::Aggregate(agg)) = err else {
///     panic!("expected both fields to fail");
/// };
/// assert_eq!(agg.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregatedErrors(Vec<FieldParseError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldParseError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldParseError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a FieldParseError;
    type IntoIter = std::slice::Iter<'a, FieldParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = FieldParseError;
    type IntoIter = std::vec::IntoIter<FieldParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
