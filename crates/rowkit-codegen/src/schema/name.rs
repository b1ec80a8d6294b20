use heck::{ToShoutySnakeCase, ToSnakeCase};
use proc_macro2::Span;

/// Lower snake case of an identifier, e.g. `MockParent` → `mock_parent`.
pub(crate) fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Upper snake case, e.g. `MockParent` → `MOCK_PARENT`.
pub(crate) fn shouty_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

/// Table name derived from a record name: the plural of its snake case.
pub(crate) fn table_name(record: &str) -> String {
    pluralizer::pluralize(&snake_case(record), 2, false)
}

/// Singular form of a table name, used by the identity heuristic.
pub(crate) fn singular(table: &str) -> String {
    pluralizer::pluralize(table, 1, false)
}

/// Builds an identifier for generated code, using the raw form for keywords
/// (a field declared as `r#type` is stored as `type`).
pub(crate) fn ident(name: &str) -> syn::Ident {
    match syn::parse_str::<syn::Ident>(name) {
        Ok(ident) => ident,
        Err(_) => syn::Ident::new_raw(name, Span::call_site()),
    }
}
