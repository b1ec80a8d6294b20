use super::{util, Expand};
use crate::schema::{Constraints, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_table_name_impl(&self) -> TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let table_name = &self.decl.table_name;

        quote! {
            impl #ident {
                #vis fn table_name(&self) -> &'static str {
                    #table_name
                }
            }
        }
    }

    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let rowkit = &self.rowkit;
        let ident = &self.ident;
        let table_name = &self.decl.table_name;

        let schema = self.decl.fields.iter().map(|field| self.expand_field_schema(field));

        let values = self.decl.fields.iter().map(|field| {
            let field_ident = util::ident(&field.name);
            quote!(#rowkit::Column::to_value(&self.#field_ident))
        });

        let pointers = self.decl.fields.iter().map(|field| {
            let field_ident = util::ident(&field.name);
            quote!(&mut self.#field_ident as &mut dyn #rowkit::Column)
        });

        quote! {
            impl #rowkit::Model for #ident {
                fn table_name(&self) -> &'static str {
                    #table_name
                }

                fn schema(&self) -> ::std::vec::Vec<#rowkit::Field> {
                    ::std::vec::Vec::from([ #( #schema ),* ])
                }

                fn values(&self) -> ::std::vec::Vec<#rowkit::Value> {
                    ::std::vec::Vec::from([ #( #values ),* ])
                }

                fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn #rowkit::Column> {
                    ::std::vec::Vec::from([ #( #pointers ),* ])
                }
            }
        }
    }

    fn expand_field_schema(&self, field: &Field) -> TokenStream {
        let rowkit = &self.rowkit;
        let name = &field.column;
        let ty = util::ident(field.ty.variant());
        let constraints = self.expand_constraints(field.constraints);
        let references = util::option_str(field.references.as_deref());
        let ref_column = util::option_str(field.ref_column.as_deref());

        quote! {
            #rowkit::Field {
                name: #name,
                ty: #rowkit::FieldType::#ty,
                constraints: #constraints,
                references: #references,
                ref_column: #ref_column,
            }
        }
    }

    fn expand_constraints(&self, constraints: Constraints) -> TokenStream {
        let rowkit = &self.rowkit;

        if constraints.is_empty() {
            return quote!(#rowkit::Constraint::NONE);
        }

        let flags = constraints.names().map(|name| {
            let flag = util::ident(name);
            quote!(#rowkit::Constraint::#flag)
        });

        quote!(#( #flags )|*)
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::Log;
    use crate::schema::Declaration;
    use std::path::Path;

    fn model_impl(src: &str) -> syn::ItemImpl {
        let file = syn::parse_file(src).unwrap();
        let decl =
            Declaration::from_file(&file, "User", Path::new("models.rs"), &mut Log::default())
                .unwrap();
        let tokens = super::Expand::new(&decl).unwrap().expand_model_impl();
        syn::parse2(tokens).unwrap()
    }

    fn method_body(item: &syn::ItemImpl, name: &str) -> String {
        item.items
            .iter()
            .find_map(|item| match item {
                syn::ImplItem::Fn(f) if f.sig.ident == name => {
                    Some(quote::ToTokens::to_token_stream(&f.block).to_string())
                }
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn three_lists_share_field_order() {
        let item = model_impl(
            r#"struct User { #[db("pk,autoincrement")] id: i64, #[db("-")] hidden: String, name: String, avatar: Vec<u8> }"#,
        );

        let schema = method_body(&item, "schema");
        let values = method_body(&item, "values");
        let pointers = method_body(&item, "pointers");

        let order = |body: &str, keys: [&str; 3]| {
            let positions: Vec<_> = keys.iter().map(|key| body.find(key).unwrap()).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{body}");
            assert!(!body.contains("hidden"));
        };

        order(&schema, ["\"id\"", "\"name\"", "\"avatar\""]);
        order(&values, ["self . id", "self . name", "self . avatar"]);
        order(&pointers, ["self . id", "self . name", "self . avatar"]);

        assert!(schema.contains("PRIMARY_KEY"));
        assert!(schema.contains("AUTO_INCREMENT"));
        assert!(schema.contains("Blob"));
        assert_eq!(values.matches("to_value").count(), 3);
        assert_eq!(pointers.matches("dyn").count(), 3);
    }

    #[test]
    fn no_constraints_is_none() {
        let item = model_impl("struct User { id: i64, name: String }");
        let schema = method_body(&item, "schema");
        assert_eq!(schema.matches("Constraint :: NONE").count(), 1);
    }
}
