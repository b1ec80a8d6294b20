mod meta;
mod model;
mod read;
mod relation;
mod util;

use crate::{schema::Declaration, Error, Result};

use proc_macro2::TokenStream;
use quote::quote;
use std::path::{Path, PathBuf};

/// Suffix appended to the source file stem to name the generated unit.
pub const OUTPUT_SUFFIX: &str = "_rowkit.rs";

/// The generated code for one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedUnit {
    /// Writes the unit, replacing whatever was at `path`.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.contents).map_err(|err| Error::io(&self.path, err))
    }
}

struct Expand<'a> {
    /// The declaration being expanded
    decl: &'a Declaration,

    /// Type identifier
    ident: syn::Ident,

    /// Visibility of generated items
    vis: syn::Visibility,

    /// Path prefix for runtime types
    rowkit: TokenStream,
}

impl<'a> Expand<'a> {
    fn new(decl: &'a Declaration) -> Result<Expand<'a>> {
        Ok(Expand {
            decl,
            ident: util::ident(&decl.name),
            vis: util::visibility(&decl.visibility)?,
            rowkit: quote!(::rowkit),
        })
    }

    /// One token stream per top-level item, in output order.
    fn expand(&self) -> Result<Vec<TokenStream>> {
        let mut items = vec![];

        if !self.decl.table_name_declared {
            items.push(self.expand_table_name_impl());
        }

        items.push(self.expand_model_impl());
        items.push(self.expand_meta_struct());
        items.push(self.expand_meta_const());
        items.push(self.expand_read_one());
        items.push(self.expand_read_all());

        for relation in &self.decl.relations {
            items.push(self.expand_loader(relation)?);
        }

        Ok(items)
    }
}

/// Emits the generated unit for the declarations of one source file.
///
/// Returns `Ok(None)` when `decls` is empty. The output depends only on the
/// declarations and their order, so unchanged input yields identical text.
pub fn emit(decls: &[&Declaration], source: &Path) -> Result<Option<GeneratedUnit>> {
    if decls.is_empty() {
        return Ok(None);
    }

    let path = output_path(source)?;
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut blocks = vec![format!(
        "// @generated by rowkit from {file_name}. DO NOT EDIT.\n\
         // schema(), values() and pointers() list the same fields in the same order."
    )];

    for decl in decls {
        for item in Expand::new(decl)?.expand()? {
            blocks.push(render(item)?);
        }
    }

    let mut contents = blocks.join("\n\n");
    contents.push('\n');

    Ok(Some(GeneratedUnit { path, contents }))
}

/// Pretty-prints one generated item, without its trailing newline.
fn render(item: TokenStream) -> Result<String> {
    let item: syn::Item = syn::parse2(item)
        .map_err(|err| Error::emit_failed(format!("generated item does not parse: {err}")))?;

    let file = syn::File {
        shebang: None,
        attrs: vec![],
        items: vec![item],
    };

    Ok(prettyplease::unparse(&file).trim_end().to_string())
}

/// Path of the generated unit for `source`: `<stem>_rowkit.rs` beside it.
pub fn output_path(source: &Path) -> Result<PathBuf> {
    let stem = source.file_stem().ok_or_else(|| {
        Error::emit_failed(format!("`{}` has no file name", source.display()))
    })?;

    Ok(source.with_file_name(format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy())))
}
