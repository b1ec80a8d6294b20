use super::{Constraints, StorageType};

/// One mapped field of a [`Declaration`](super::Declaration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared field name, without any `r#` prefix
    pub name: String,

    /// Storage column name
    pub column: String,

    pub ty: StorageType,

    pub constraints: Constraints,

    /// Table referenced by `ref=`
    pub references: Option<String>,

    /// Column referenced by `ref=<table>:<column>`
    pub ref_column: Option<String>,

    /// The single field holding the record identity
    pub primary_key: bool,

    /// Native type as written in the source, e.g. `Vec<u8>`
    pub native: String,
}

impl Field {
    pub fn is_foreign_key_to(&self, table: &str) -> bool {
        self.references.as_deref() == Some(table)
    }
}

/// A `Vec<Record>` field. Never mapped to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionField {
    pub name: String,

    /// Name of the element record type
    pub element: String,
}
