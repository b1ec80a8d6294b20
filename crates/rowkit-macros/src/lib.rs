extern crate proc_macro;

use proc_macro::TokenStream;

/// Registers the `#[db]` field attribute and rejects structs a generator run
/// would skip with an error. Expands to nothing: the implementations live in
/// the generated `*_rowkit.rs` unit.
#[proc_macro_derive(Model, attributes(db))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match rowkit_codegen::check(input.into()) {
        Ok(()) => TokenStream::new(),
        Err(e) => e.to_compile_error().into(),
    }
}
