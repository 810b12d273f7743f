//! Serialisable summary of the variables a record honours.

use serde::Serialize;

use crate::{Describe, FieldKind, OverlayError, OverlayResult, Shape};

/// One row of a record's binding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDoc {
    /// Field identifier.
    pub field: &'static str,
    /// Declared kind of the field.
    pub kind: FieldKind,
    /// Fully qualified external key, including the record's prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Whether the engine will ever touch the field.
    pub accessible: bool,
}

impl BindingDoc {
    /// Whether a value supplied under [`Self::key`] can change the field.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.accessible && self.key.is_some() && !matches!(self.kind, FieldKind::Unsupported)
    }
}

/// List every field of `R` with its kind and external key.
///
/// # Examples
///
/// ```
/// use config12::{Describe, FieldKind};
///
/// #[derive(Clone, Describe)]
/// #[c12(prefix = "APP_")]
/// struct Settings {
///     #[c12(env)]
///     port: u16,
///     motd: String,
/// }
///
/// let docs = config12::bindings::<Settings>()?;
/// assert_eq!(docs[0].key.as_deref(), Some("APP_PORT"));
/// assert_eq!(docs[0].kind, FieldKind::Integer);
/// assert_eq!(docs[1].key, None);
/// # Ok::<(), config12::OverlayError>(())
/// ```
///
/// # Errors
///
/// Returns [`OverlayError::NotARecord`] when `R` is not a record.
pub fn bindings<R: Describe>() -> OverlayResult<Vec<BindingDoc>> {
    let descriptor = match R::shape() {
        Shape::Record(descriptor) => descriptor,
        Shape::Other(kind) => return Err(OverlayError::not_a_record::<R>(kind)),
    };
    let prefix = descriptor.prefix().unwrap_or_default();
    Ok(descriptor
        .fields()
        .iter()
        .map(|field| BindingDoc {
            field: field.name(),
            kind: field.kind(),
            key: field.external_key().map(|key| format!("{prefix}{key}")),
            accessible: field.is_accessible(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    //! Binding table generation and serialisation.

    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[derive(Clone, Describe)]
    #[expect(
        dead_code,
        reason = "fields are only reached through the generated descriptor table"
    )]
    struct Service {
        #[c12(env = "SERVICE_URL")]
        url: String,
        #[c12(env = "VERBOSE")]
        verbose: bool,
        #[c12(env = "TOKEN", skip)]
        token: String,
        #[c12(env = "TAGS")]
        tags: Vec<String>,
    }

    #[rstest]
    fn bindings_follow_declaration_order() -> Result<()> {
        let docs = bindings::<Service>()?;
        let fields: Vec<_> = docs.iter().map(|doc| doc.field).collect();
        ensure!(fields == ["url", "verbose", "token", "tags"], "{fields:?}");
        Ok(())
    }

    #[rstest]
    fn only_accessible_supported_bindings_are_live() -> Result<()> {
        let live: Vec<_> = bindings::<Service>()?
            .into_iter()
            .filter(BindingDoc::is_live)
            .map(|doc| doc.field)
            .collect();
        ensure!(live == ["url", "verbose"], "{live:?}");
        Ok(())
    }

    #[rstest]
    fn bindings_serialise_to_json() -> Result<()> {
        let docs = bindings::<Service>()?;
        let verbose = docs
            .get(1)
            .ok_or_else(|| anyhow::anyhow!("expected a second binding in {docs:?}"))?;
        let value = serde_json::to_value(verbose)?;
        ensure!(
            value
                == json!({
                    "field": "verbose",
                    "kind": "boolean",
                    "key": "VERBOSE",
                    "accessible": true,
                }),
            "{value}"
        );
        Ok(())
    }

    #[rstest]
    fn bindings_reject_non_records() {
        assert!(matches!(
            bindings::<Vec<String>>(),
            Err(OverlayError::NotARecord { .. })
        ));
    }
}
