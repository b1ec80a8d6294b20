use super::{util, Expand};
use crate::schema::name;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    fn meta_struct_ident(&self) -> syn::Ident {
        util::ident(&format!("{}Meta", self.decl.name))
    }

    fn meta_const_ident(&self) -> syn::Ident {
        util::ident(&format!("{}_META", name::shouty_snake_case(&self.decl.name)))
    }

    /// Column names as constants, so queries can name columns without
    /// string literals.
    pub(super) fn expand_meta_struct(&self) -> TokenStream {
        let vis = &self.vis;
        let meta_ident = self.meta_struct_ident();
        let fields = self.decl.fields.iter().map(|field| util::ident(&field.name));

        quote! {
            #[allow(dead_code)]
            #vis struct #meta_ident {
                pub table_name: &'static str,
                #( pub #fields: &'static str, )*
            }
        }
    }

    pub(super) fn expand_meta_const(&self) -> TokenStream {
        let vis = &self.vis;
        let meta_ident = self.meta_struct_ident();
        let const_ident = self.meta_const_ident();
        let table_name = &self.decl.table_name;
        let fields = self.decl.fields.iter().map(|field| {
            let field_ident = util::ident(&field.name);
            let column = &field.column;
            quote!(#field_ident: #column)
        });

        quote! {
            #[allow(dead_code)]
            #vis const #const_ident: #meta_ident = #meta_ident {
                table_name: #table_name,
                #( #fields, )*
            };
        }
    }
}
