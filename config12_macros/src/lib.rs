//! Procedural macros for `config12`.
//!
//! [`Describe`] builds a static field table for a struct with named fields.
//! Fields opt in to overlay with `#[c12(env = "KEY")]`, or `#[c12(env)]` to
//! use the field name in `SCREAMING_SNAKE_CASE`. `#[c12(skip)]` hides a field
//! from the engine entirely.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `config12::Describe`.
///
/// Struct-level keys: `prefix = "APP_"` and `crate = "path"`.
/// Field-level keys: `env`, `env = "KEY"`, `skip` and
/// `kind = "string" | "integer" | "boolean"` for type aliases the macro
/// cannot see through.
#[proc_macro_derive(Describe, attributes(c12))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
