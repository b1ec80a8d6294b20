mod config;
pub use config::Config;

mod diagnostic;
pub use diagnostic::{Diagnostic, Severity};

mod error;
pub use error::Error;

mod expand;
pub use expand::{emit, output_path, GeneratedUnit, OUTPUT_SUFFIX};

mod generator;
pub use generator::Generator;

pub mod schema;
pub use schema::{CollectionField, Constraints, Declaration, Field, Relation, StorageType};

use proc_macro2::TokenStream;
use std::path::Path;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Validates a single struct for `#[derive(Model)]`.
///
/// Runs the declaration parser over the struct alone and turns anything that
/// would make a generator run reject it into a `syn::Error` on the type name.
/// Field-level warnings are not reported.
pub fn check(input: TokenStream) -> syn::Result<()> {
    let item: syn::Item = syn::parse2(input)?;

    let syn::Item::Struct(item) = item else {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "`Model` can only be derived for structs",
        ));
    };

    let mut log = diagnostic::Log::default();
    schema::Declaration::from_item(&[], &item, Path::new(""), &mut log)
        .map(|_| ())
        .map_err(|err| syn::Error::new_spanned(&item.ident, err.to_string()))
}
