//! Token generation for the `Describe` implementation.
//!
//! The descriptor table is emitted as a pair of `static`s inside
//! `Describe::shape`, alongside one setter function per supported field.
//! Setters are plain `fn` items so they coerce to the pointer types
//! `config12::Accessor` stores.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::kind::Kind;
use super::parse::{ParsedField, ParsedInput};

/// Emit `impl Describe for <ident>`.
pub(crate) fn describe_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let count = input.fields.len();

    let setters = input
        .fields
        .iter()
        .filter_map(|field| setter_fn(ident, field));
    let fields = input
        .fields
        .iter()
        .map(|field| field_descriptor(field, krate));
    let prefix = input
        .struct_attrs
        .prefix
        .as_ref()
        .map(|prefix| quote! { .with_prefix(#prefix) });

    quote! {
        #[automatically_derived]
        impl #krate::Describe for #ident {
            fn shape() -> #krate::Shape<Self> {
                #(#setters)*
                static FIELDS: [#krate::FieldDescriptor<#ident>; #count] = [
                    #(#fields),*
                ];
                static DESCRIPTOR: #krate::RecordDescriptor<#ident> =
                    #krate::RecordDescriptor::new(#type_name, &FIELDS) #prefix;
                #krate::Shape::Record(&DESCRIPTOR)
            }
        }
    }
}

fn setter_ident(field: &ParsedField) -> Ident {
    format_ident!("__c12_set_{}", field.name())
}

/// Setter for one field, or `None` when the kind is unsupported.
fn setter_fn(record: &Ident, field: &ParsedField) -> Option<TokenStream> {
    let name = setter_ident(field);
    let member = &field.ident;
    let ty = &field.ty;
    let tokens = match field.kind() {
        Kind::String => quote! {
            fn #name(record: &mut #record, value: ::std::string::String) {
                record.#member = ::core::convert::Into::into(value);
            }
        },
        Kind::Integer => quote! {
            fn #name(
                record: &mut #record,
                raw: &str,
            ) -> ::core::result::Result<(), ::core::num::ParseIntError> {
                record.#member = raw.parse::<#ty>()?;
                ::core::result::Result::Ok(())
            }
        },
        Kind::Boolean => quote! {
            fn #name(record: &mut #record, value: bool) {
                record.#member = value;
            }
        },
        Kind::Unsupported => return None,
    };
    Some(tokens)
}

fn field_descriptor(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = field.name();
    let setter = setter_ident(field);
    let accessor = match field.kind() {
        Kind::String => quote! { #krate::Accessor::String(#setter) },
        Kind::Integer => quote! { #krate::Accessor::Integer(#setter) },
        Kind::Boolean => quote! { #krate::Accessor::Boolean(#setter) },
        Kind::Unsupported => quote! { #krate::Accessor::Unsupported },
    };
    let bind = field
        .external_key()
        .map(|key| quote! { .bind(#key) });
    let hidden = field.attrs.skip.then(|| quote! { .hidden() });
    quote! {
        #krate::FieldDescriptor::new(#name, #accessor) #bind #hidden
    }
}
