use crate::{Error, Result};

/// Parsed `#[db(..)]` tokens of one field.
///
/// Allowed syntax:
///
/// #[db("-")]
/// #[db("pk,autoincrement")]
/// #[db = "unique, not_null, ref=users:id"]
/// #[db("column=display_name")]
///
/// Several `#[db]` attributes on one field are read in order, as if their
/// strings were joined with a comma.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldAttr {
    /// `-`: drop the field from every generated array
    pub exclude: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub not_null: bool,
    pub auto_increment: bool,

    /// `ref=<table>`
    pub references: Option<String>,

    /// `ref=<table>:<column>`
    pub ref_column: Option<String>,

    /// `column=<name>`
    pub column: Option<String>,

    /// Tokens that were ignored, with the reason; reported as warnings
    pub ignored: Vec<String>,
}

impl FieldAttr {
    pub(crate) fn from_ast(attrs: &[syn::Attribute], record: &str, field: &str) -> Result<FieldAttr> {
        let mut result = FieldAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("db") {
                continue;
            }

            let lit = attr_string(attr)
                .map_err(|err| Error::invalid_attribute(record, field, err.to_string()))?;
            result.apply(&lit.value());
        }

        Ok(result)
    }

    /// Applies a comma-separated token list. Every token adds to what is
    /// already set; nothing is cleared by a later token.
    pub fn apply(&mut self, tokens: &str) {
        for token in tokens.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }

            match token {
                "-" => self.exclude = true,
                "pk" => self.primary_key = true,
                "unique" => self.unique = true,
                "not_null" => self.not_null = true,
                "autoincrement" => self.auto_increment = true,
                _ => {
                    if let Some(target) = token.strip_prefix("ref=") {
                        self.apply_ref(token, target);
                    } else if let Some(column) = token.strip_prefix("column=") {
                        let column = column.trim();
                        if column.is_empty() {
                            self.ignored.push(format!("`{token}` has an empty column name"));
                        } else {
                            self.column = Some(column.to_string());
                        }
                    } else {
                        self.ignored.push(format!("unknown token `{token}`"));
                    }
                }
            }
        }
    }

    fn apply_ref(&mut self, token: &str, target: &str) {
        let (table, column) = match target.split_once(':') {
            Some((table, column)) => (table.trim(), Some(column.trim())),
            None => (target.trim(), None),
        };

        if table.is_empty() {
            self.ignored.push(format!("`{token}` has an empty table name"));
            return;
        }

        self.references = Some(table.to_string());
        self.ref_column = column
            .filter(|column| !column.is_empty())
            .map(str::to_string);
    }
}

fn attr_string(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    match &attr.meta {
        syn::Meta::List(_) => attr.parse_args(),
        syn::Meta::NameValue(nv) => match &nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => Ok(lit.clone()),
            value => Err(syn::Error::new_spanned(value, "expected a string literal")),
        },
        syn::Meta::Path(path) => Err(syn::Error::new_spanned(
            path,
            "expected `#[db(\"..\")]` or `#[db = \"..\"]`",
        )),
    }
}
