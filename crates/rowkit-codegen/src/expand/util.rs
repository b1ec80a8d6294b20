use crate::{schema::name, Error, Result};

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn ident(name: &str) -> syn::Ident {
    name::ident(name)
}

/// `<prefix>_<snake case of record>`, e.g. `read_all_mock_parent`.
pub(crate) fn fn_ident(prefix: &str, record: &str) -> syn::Ident {
    ident(&format!("{prefix}_{}", name::snake_case(record)))
}

pub(crate) fn visibility(src: &str) -> Result<syn::Visibility> {
    if src.is_empty() {
        return Ok(syn::Visibility::Inherited);
    }

    syn::parse_str(src).map_err(|err| Error::emit_failed(format!("visibility `{src}`: {err}")))
}

pub(crate) fn ty(src: &str) -> Result<syn::Type> {
    syn::parse_str(src).map_err(|err| Error::emit_failed(format!("type `{src}`: {err}")))
}

pub(crate) fn option_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}
