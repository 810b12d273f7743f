//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[c12(crate = "...")]` attribute value into the
//! path generated code uses to reach `config12` items, so a crate that
//! renames the dependency still gets working `Describe` impls.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `config12` when no override is present. When the user
/// specifies `#[c12(crate = "...")]`, the descriptor types and the
/// `Describe` trait are referenced through the aliased name instead.
///
/// # Examples
///
/// ```rust,ignore
/// let default = resolve(None);
/// assert_eq!(default.to_string(), "config12");
///
/// let path: syn::Path = syn::parse_str("deps::env_overlay")?;
/// let aliased = resolve(Some(&path));
/// assert_eq!(aliased.to_string(), "deps :: env_overlay");
/// ```
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { config12 }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::default(None, "config12")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::config12"), "deps :: config12")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input.map(syn::parse_str::<syn::Path>).transpose()?;
        let rendered = resolve(parsed.as_ref()).to_string();
        ensure!(rendered == expected, "expected {expected:?}, got {rendered:?}");
        Ok(())
    }
}
