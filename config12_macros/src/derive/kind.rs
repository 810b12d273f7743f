//! Classification of field types into the kinds the engine overlays.

use syn::{LitStr, Type};

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Compile-time mirror of `config12::FieldKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    String,
    Integer,
    Boolean,
    Unsupported,
}

impl Kind {
    /// Parse an explicit `kind = "..."` override.
    pub(crate) fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "boolean" => Ok(Self::Boolean),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown kind `{other}`; expected string, integer or boolean"),
            )),
        }
    }

    /// Infer the kind from the field's type.
    ///
    /// Only the final path segment is inspected, so `std::string::String`
    /// and `String` both match. Aliases are not resolved; use an explicit
    /// `kind` for those.
    pub(crate) fn classify(ty: &Type) -> Self {
        match ty {
            Type::Group(group) => Self::classify(&group.elem),
            Type::Paren(paren) => Self::classify(&paren.elem),
            Type::Path(path) if path.qself.is_none() => {
                let Some(last) = path.path.segments.last() else {
                    return Self::Unsupported;
                };
                if !last.arguments.is_empty() {
                    return Self::Unsupported;
                }
                let name = last.ident.to_string();
                match name.as_str() {
                    "String" => Self::String,
                    "bool" => Self::Boolean,
                    int if INTEGER_TYPES.contains(&int) => Self::Integer,
                    _ => Self::Unsupported,
                }
            }
            _ => Self::Unsupported,
        }
    }
}
