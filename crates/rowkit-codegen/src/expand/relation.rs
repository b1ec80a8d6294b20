use super::{util, Expand};
use crate::{schema::Relation, Result};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Loads every child row whose foreign key equals `parent_id`.
    pub(super) fn expand_loader(&self, relation: &Relation) -> Result<TokenStream> {
        let rowkit = &self.rowkit;
        let vis = &self.vis;
        let ident = &self.ident;
        let loader = util::ident(&relation.loader);
        let read_all = util::fn_ident("read_all", &self.decl.name);
        let fk_ty = util::ty(&relation.fk_native)?;
        let table_name = &self.decl.table_name;
        let fk_column = &relation.fk_column;

        Ok(quote! {
            #[allow(dead_code)]
            #vis fn #loader<D: #rowkit::Db>(
                db: &D,
                parent_id: #fk_ty,
            ) -> #rowkit::Result<::std::vec::Vec<#ident>> {
                let query = #rowkit::Query::new(#table_name)
                    .filter_eq(#fk_column, #rowkit::Column::to_value(&parent_id));
                #read_all(#rowkit::Db::query(db, query))
            }
        })
    }
}
