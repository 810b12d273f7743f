//! The overlay engine.
//!
//! [`Overlay`] walks a record's descriptor table in declaration order. Each
//! accessible, bound field is looked up once; present, non-blank values are
//! parsed by kind and written through the field's accessor. Everything else
//! keeps the value from the defaults.

use std::borrow::Cow;

use crate::{
    Accessor, Describe, FieldDescriptor, FieldParseError, Lookup, OverlayError, OverlayResult,
    Shape,
};

/// What the engine does when a bound integer field fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort on the first failure. No partial result is produced.
    #[default]
    FailFast,
    /// Keep the field's default, carry on, and report the failure alongside
    /// the result.
    SkipField,
    /// Process every field, then fail with all failures if there were any.
    Collect,
}

/// Result of an overlay together with any fields skipped under
/// [`ParsePolicy::SkipField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlaid<R> {
    value: R,
    skipped: Vec<FieldParseError>,
}

impl<R> Overlaid<R> {
    /// The overlaid record.
    #[must_use]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// Parse failures for fields left at their default.
    #[must_use]
    pub fn skipped(&self) -> &[FieldParseError] {
        &self.skipped
    }

    /// Discard the skip report and return the record.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.value
    }

    /// Split into the record and the skip report.
    #[must_use]
    pub fn into_parts(self) -> (R, Vec<FieldParseError>) {
        (self.value, self.skipped)
    }
}

/// Configurable overlay run.
///
/// # Examples
///
/// ```
/// use config12::{Describe, Overlay, ParsePolicy};
/// use std::collections::HashMap;
///
/// #[derive(Clone, Debug, PartialEq, Describe)]
/// struct Worker {
///     #[c12(env = "THREADS")]
///     threads: u8,
///     #[c12(env = "NAME")]
///     name: String,
/// }
///
/// let env = HashMap::from([
///     ("SVC_THREADS".to_owned(), "many".to_owned()),
///     ("SVC_NAME".to_owned(), "indexer".to_owned()),
/// ]);
/// let defaults = Worker { threads: 4, name: "worker".into() };
/// let outcome = Overlay::new(&env)
///     .prefix("SVC_")
///     .policy(ParsePolicy::SkipField)
///     .apply(&defaults)?;
///
/// assert_eq!(outcome.value(), &Worker { threads: 4, name: "indexer".into() });
/// assert_eq!(outcome.skipped()[0].external_key, "SVC_THREADS");
/// # Ok::<(), config12::OverlayError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Overlay<L> {
    lookup: L,
    policy: ParsePolicy,
    prefix: Option<String>,
}

impl<L: Lookup> Overlay<L> {
    /// Overlay values from `lookup` using [`ParsePolicy::FailFast`].
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self {
            lookup,
            policy: ParsePolicy::FailFast,
            prefix: None,
        }
    }

    /// Select how integer parse failures are handled.
    #[must_use]
    pub const fn policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Prepend `prefix` to every external key, replacing any prefix the
    /// record declares.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Overlay external values onto `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NotARecord`] before consulting the lookup when
    /// `R` is not a record. Parse failures are reported according to the
    /// active [`ParsePolicy`].
    pub fn apply<R: Describe>(&self, defaults: &R) -> OverlayResult<Overlaid<R>> {
        let descriptor = match R::shape() {
            Shape::Record(descriptor) => descriptor,
            Shape::Other(kind) => return Err(OverlayError::not_a_record::<R>(kind)),
        };
        let prefix = self.prefix.as_deref().or_else(|| descriptor.prefix());

        let mut value = defaults.clone();
        let mut failures = Vec::new();
        for field in descriptor.fields() {
            if let Err(err) = self.overlay_field(field, prefix, &mut value) {
                if self.policy == ParsePolicy::FailFast {
                    return Err(err.into());
                }
                failures.push(err);
            }
        }

        if self.policy == ParsePolicy::Collect
            && let Some(err) = OverlayError::try_aggregate(failures.drain(..))
        {
            return Err(err);
        }
        Ok(Overlaid {
            value,
            skipped: failures,
        })
    }

    fn overlay_field<R>(
        &self,
        field: &FieldDescriptor<R>,
        prefix: Option<&str>,
        record: &mut R,
    ) -> Result<(), FieldParseError> {
        if !field.is_accessible() {
            return Ok(());
        }
        let Some(key) = field.external_key() else {
            return Ok(());
        };
        let qualified = qualify(prefix, key);
        let Some(raw) = self.lookup.lookup(&qualified).filter(|raw| !is_blank(raw)) else {
            return Ok(());
        };

        match field.accessor() {
            Accessor::String(set) => set(record, raw),
            Accessor::Integer(set) => {
                if let Err(source) = set(record, &raw) {
                    return Err(FieldParseError::new(
                        field.name(),
                        qualified.into_owned(),
                        raw,
                        source,
                    ));
                }
            }
            Accessor::Boolean(set) => set(record, parse_bool(&raw)),
            Accessor::Unsupported => {}
        }
        Ok(())
    }
}

/// Overlay `lookup` onto `defaults`, aborting on the first parse failure.
///
/// # Errors
///
/// Returns [`OverlayError::NotARecord`] when `R` is not a record and
/// [`OverlayError::FieldParse`] for the first bound integer field whose value
/// does not parse.
pub fn overlay<R: Describe, L: Lookup>(defaults: &R, lookup: L) -> OverlayResult<R> {
    Overlay::new(lookup)
        .apply(defaults)
        .map(Overlaid::into_inner)
}

fn qualify<'a>(prefix: Option<&str>, key: &'a str) -> Cow<'a, str> {
    match prefix {
        Some(head) if !head.is_empty() => Cow::Owned(format!("{head}{key}")),
        _ => Cow::Borrowed(key),
    }
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Only `true`, in any letter case, is true. Everything else is false.
const fn parse_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}
