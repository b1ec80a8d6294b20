use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_read_one(&self) -> TokenStream {
        let rowkit = &self.rowkit;
        let vis = &self.vis;
        let ident = &self.ident;
        let fn_ident = util::fn_ident("read_one", &self.decl.name);

        quote! {
            #[allow(dead_code)]
            #vis fn #fn_ident<R: #rowkit::Reader>(
                reader: R,
                model: &mut #ident,
            ) -> #rowkit::Result<&mut #ident> {
                #rowkit::Reader::read_one(reader, &mut *model)?;
                ::core::result::Result::Ok(model)
            }
        }
    }

    /// Every row becomes a `Default` value before its columns are filled in.
    pub(super) fn expand_read_all(&self) -> TokenStream {
        let rowkit = &self.rowkit;
        let vis = &self.vis;
        let ident = &self.ident;
        let fn_ident = util::fn_ident("read_all", &self.decl.name);

        quote! {
            #[allow(dead_code)]
            #vis fn #fn_ident<R: #rowkit::Reader>(
                reader: R,
            ) -> #rowkit::Result<::std::vec::Vec<#ident>> {
                #rowkit::Reader::read_all(reader, <#ident as ::core::default::Default>::default)
            }
        }
    }
}
