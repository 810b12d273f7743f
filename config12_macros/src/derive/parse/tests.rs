//! Tests for `#[c12(...)]` attribute parsing.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::{EnvKey, ParsedInput, parse_input};
use crate::derive::kind::Kind;

fn parse(input: &DeriveInput) -> Result<ParsedInput> {
    parse_input(input).map_err(|err| anyhow!(err))
}

fn parse_error(input: &DeriveInput) -> Result<String> {
    match parse_input(input) {
        Ok(_) => Err(anyhow!("expected parse_input to fail")),
        Err(err) => Ok(err.to_string()),
    }
}

#[rstest]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[c12(prefix = "APP_", crate = "deps::config12")]
        struct Demo {
            #[c12(env = "PORT")]
            port: u16,
            #[c12(env)]
            log_level: String,
            #[c12(env = "SECRET", skip)]
            secret: String,
            #[c12(env = "RETRIES", kind = "integer")]
            retries: Retries,
            untouched: bool,
        }
    };
    let parsed = parse(&input)?;
    ensure!(parsed.ident == "Demo", "ident was {}", parsed.ident);
    ensure!(
        parsed.struct_attrs.prefix.as_ref().map(syn::LitStr::value).as_deref() == Some("APP_"),
        "prefix not parsed"
    );
    ensure!(parsed.struct_attrs.crate_path.is_some(), "crate path not parsed");

    let keys: Vec<_> = parsed.fields.iter().map(|f| f.external_key()).collect();
    ensure!(
        keys == [
            Some("PORT".to_owned()),
            Some("LOG_LEVEL".to_owned()),
            Some("SECRET".to_owned()),
            Some("RETRIES".to_owned()),
            None,
        ],
        "unexpected keys {keys:?}"
    );
    let skipped: Vec<_> = parsed.fields.iter().map(|f| f.attrs.skip).collect();
    ensure!(skipped == [false, false, true, false, false], "{skipped:?}");
    let kinds: Vec<_> = parsed.fields.iter().map(super::ParsedField::kind).collect();
    ensure!(
        kinds == [Kind::Integer, Kind::String, Kind::String, Kind::Integer, Kind::Boolean],
        "{kinds:?}"
    );
    Ok(())
}

#[rstest]
fn bare_env_uses_unraw_field_name() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[c12(env)]
            r#type: String,
        }
    };
    let parsed = parse(&input)?;
    let field = parsed
        .fields
        .first()
        .ok_or_else(|| anyhow!("missing field"))?;
    ensure!(matches!(field.attrs.env, Some(EnvKey::FieldName)), "env not bare");
    ensure!(field.name() == "type", "name was {}", field.name());
    ensure!(field.external_key().as_deref() == Some("TYPE"), "key mismatch");
    Ok(())
}

#[rstest]
fn ignores_foreign_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[derive(Clone)]
        struct Demo {
            /// Documented.
            #[serde(default)]
            port: u16,
        }
    };
    let parsed = parse(&input)?;
    ensure!(parsed.fields.len() == 1, "expected one field");
    ensure!(parsed.fields.iter().all(|f| f.external_key().is_none()), "unexpected key");
    Ok(())
}

#[rstest]
#[case::enumeration(parse_quote! { enum Demo { A, B } }, "only be derived for structs")]
#[case::tuple(parse_quote! { struct Demo(u8); }, "requires named fields")]
#[case::unit(parse_quote! { struct Demo; }, "requires named fields")]
#[case::generic(parse_quote! { struct Demo<T> { value: T } }, "generic structs")]
#[case::unknown_field_key(
    parse_quote! { struct Demo { #[c12(default = 1)] port: u16 } },
    "unsupported c12 field attribute"
)]
#[case::unknown_struct_key(
    parse_quote! { #[c12(rename_all = "lower")] struct Demo { port: u16 } },
    "unsupported c12 struct attribute"
)]
#[case::empty_env(
    parse_quote! { struct Demo { #[c12(env = "")] port: u16 } },
    "env must not be empty"
)]
#[case::non_string_env(
    parse_quote! { struct Demo { #[c12(env = 5)] port: u16 } },
    "env must be a string"
)]
#[case::bad_kind(
    parse_quote! { struct Demo { #[c12(env = "P", kind = "float")] port: f32 } },
    "unknown kind `float`"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let message = parse_error(&input)?;
    ensure!(
        message.contains(expected),
        "expected error containing {expected:?}, got {message:?}"
    );
    Ok(())
}
