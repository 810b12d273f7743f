//! Parsing of `#[c12(...)]` attributes for the `Describe` derive.
//!
//! The struct identifier, fields and attribute metadata are gathered in one
//! pass so expansion fails fast with a spanned error.

use heck::ToShoutySnakeCase;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Lit, LitStr, Type};

use super::kind::Kind;

/// Struct-level `#[c12(...)]` metadata.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub prefix: Option<LitStr>,
    pub crate_path: Option<syn::Path>,
}

/// Where a field's external key comes from.
pub(crate) enum EnvKey {
    /// `#[c12(env = "KEY")]`.
    Explicit(LitStr),
    /// `#[c12(env)]`: the field name in `SCREAMING_SNAKE_CASE`.
    FieldName,
}

/// Field-level `#[c12(...)]` metadata.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub env: Option<EnvKey>,
    pub skip: bool,
    pub kind: Option<Kind>,
}

pub(crate) struct ParsedField {
    pub ident: Ident,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

impl ParsedField {
    /// Field name without any raw-identifier prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// External key the field binds to, if any.
    pub(crate) fn external_key(&self) -> Option<String> {
        match self.attrs.env.as_ref()? {
            EnvKey::Explicit(key) => Some(key.value()),
            EnvKey::FieldName => Some(self.name().to_shouty_snake_case()),
        }
    }

    /// Kind from an explicit override, falling back to the field's type.
    pub(crate) fn kind(&self) -> Kind {
        self.attrs.kind.unwrap_or_else(|| Kind::classify(&self.ty))
    }
}

pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Iterate all `#[c12(...)]` attributes and apply a callback to each key.
fn parse_c12<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("c12")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

fn non_empty(lit: LitStr, key: &str) -> syn::Result<LitStr> {
    if lit.value().is_empty() {
        return Err(syn::Error::new(lit.span(), format!("{key} must not be empty")));
    }
    Ok(lit)
}

/// Extract struct-level metadata. Unknown keys are rejected.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_c12(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("prefix") => {
                out.prefix = Some(lit_str(meta, "prefix")?);
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
            }
            _ => return Err(meta.error("unsupported c12 struct attribute")),
        }
        Ok(())
    })?;
    Ok(out)
}

/// Extract field-level metadata. Unknown keys are rejected.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_c12(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("env") if meta.input.peek(syn::Token![=]) => {
                out.env = Some(EnvKey::Explicit(non_empty(lit_str(meta, "env")?, "env")?));
            }
            Some("env") => out.env = Some(EnvKey::FieldName),
            Some("skip") => out.skip = true,
            Some("kind") => out.kind = Some(Kind::from_lit(&lit_str(meta, "kind")?)?),
            _ => return Err(meta.error("unsupported c12 field attribute")),
        }
        Ok(())
    })?;
    Ok(out)
}

/// Gather the struct identifier, fields and attribute metadata.
///
/// Enums, unions, tuple structs, unit structs and generic structs are
/// rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Describe requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Describe can only be derived for structs",
            ));
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Describe cannot be derived for generic structs",
        ));
    }

    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        fields.push(ParsedField {
            ident: field_ident,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }
    Ok(ParsedInput {
        ident,
        struct_attrs,
        fields,
    })
}

#[cfg(test)]
mod tests;
