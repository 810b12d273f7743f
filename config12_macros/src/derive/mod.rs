//! Expansion of `#[derive(Describe)]`.

mod crate_path;
mod generate;
mod kind;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and emit the `Describe` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    Ok(generate::describe_impl(&parsed, &krate))
}
