use super::{
    name, resolve, table_name, CollectionField, Field, FieldAttr, NativeType, Relation,
};
use crate::{diagnostic::Log, Error, Result};

use quote::ToTokens;
use std::path::{Path, PathBuf};
use syn::ext::IdentExt;

/// Storage metadata of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Type name
    pub name: String,

    /// Visibility of the type, e.g. `pub`, `pub(crate)`, or empty
    pub visibility: String,

    /// Source unit the type was declared in
    pub source: PathBuf,

    /// Originating module: the source file stem
    pub module: String,

    pub table_name: String,

    /// `table_name` is written by hand next to the type
    pub table_name_declared: bool,

    /// Mapped fields, in source order
    pub fields: Vec<Field>,

    pub collections: Vec<CollectionField>,

    /// One-to-many relations in which this record is the child
    pub relations: Vec<Relation>,
}

impl Declaration {
    /// Parses the struct called `name` out of an already parsed source unit.
    pub(crate) fn from_file(
        file: &syn::File,
        name: &str,
        source: &Path,
        log: &mut Log,
    ) -> Result<Declaration> {
        let item = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Struct(item) if item.ident == name => Some(item),
                _ => None,
            })
            .ok_or_else(|| Error::declaration_not_found(name, source))?;

        Declaration::from_item(&file.items, item, source, log)
    }

    /// Parses one struct. `items` are searched for a hand-written
    /// `table_name`.
    pub(crate) fn from_item(
        items: &[syn::Item],
        ast: &syn::ItemStruct,
        source: &Path,
        log: &mut Log,
    ) -> Result<Declaration> {
        let name = ast.ident.unraw().to_string();

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(Error::not_a_record(&name, "fields must be named"));
        };

        if !ast.generics.params.is_empty() {
            return Err(Error::not_a_record(&name, "generic parameters are not supported"));
        }

        let declared = table_name::declared(items, &name)?;
        let table_name_declared = declared.is_some();
        let table_name = declared.unwrap_or_else(|| name::table_name(&name));

        let mut fields: Vec<Field> = vec![];
        let mut collections = vec![];
        let mut primary_key_claimed = false;

        for node in &node.named {
            let Some(ident) = &node.ident else {
                continue;
            };
            let field_name = ident.unraw().to_string();

            let attr = FieldAttr::from_ast(&node.attrs, &name, &field_name)?;

            if attr.exclude {
                continue;
            }

            for reason in &attr.ignored {
                log.warn(
                    Some(source),
                    format!("`{name}.{field_name}`: ignoring {reason}"),
                );
            }

            let native = super::ty::native_name(&node.ty);

            let storage = match NativeType::classify(&node.ty) {
                NativeType::Storage(storage) => storage,
                NativeType::Collection(element) => {
                    let element = if element == "Self" {
                        name.clone()
                    } else {
                        element
                    };
                    collections.push(CollectionField {
                        name: field_name,
                        element,
                    });
                    continue;
                }
                NativeType::DateTime => {
                    log.warn(
                        Some(source),
                        format!(
                            "skipping `{name}.{field_name}`: date/time type `{native}` cannot be \
                             stored; encode it as an integer such as seconds since the Unix epoch"
                        ),
                    );
                    continue;
                }
                NativeType::Unsupported => {
                    log.warn(
                        Some(source),
                        format!("skipping `{name}.{field_name}`: unsupported type `{native}`"),
                    );
                    continue;
                }
            };

            if field_name == "table_name" {
                return Err(Error::duplicate_column(&name, "table_name"));
            }

            let column = attr
                .column
                .clone()
                .unwrap_or_else(|| name::snake_case(&field_name));

            if fields.iter().any(|field| field.column == column) {
                return Err(Error::duplicate_column(&name, &column));
            }

            let resolution = resolve::resolve_field(resolve::FieldInput {
                storage,
                attr: &attr,
                field: &field_name,
                table: &table_name,
                primary_key_claimed,
            })
            .map_err(|err| Error::auto_increment(&name, &field_name, err.storage.as_str()))?;

            primary_key_claimed |= resolution.primary_key;

            fields.push(Field {
                name: field_name,
                column,
                ty: storage,
                constraints: resolution.constraints,
                references: resolution.references,
                ref_column: resolution.ref_column,
                primary_key: resolution.primary_key,
                native,
            });
        }

        Ok(Declaration {
            visibility: visibility(&ast.vis),
            source: source.to_path_buf(),
            module: source
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            name,
            table_name,
            table_name_declared,
            fields,
            collections,
            relations: vec![],
        })
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.primary_key)
    }
}

fn visibility(vis: &syn::Visibility) -> String {
    match vis {
        syn::Visibility::Public(_) => "pub".to_string(),
        syn::Visibility::Inherited => String::new(),
        syn::Visibility::Restricted(restricted) => {
            let path = compact(restricted.path.to_token_stream());
            match restricted.in_token {
                Some(_) => format!("pub(in {path})"),
                None => format!("pub({path})"),
            }
        }
    }
}

fn compact(tokens: proc_macro2::TokenStream) -> String {
    tokens
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
