use super::Error;

/// Error when two mapped fields of one record resolve to the same column, or
/// a field claims a name reserved by the metadata descriptor.
#[derive(Debug)]
pub(super) struct DuplicateColumn {
    record: Box<str>,
    column: Box<str>,
}

impl std::error::Error for DuplicateColumn {}

impl core::fmt::Display for DuplicateColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` is mapped more than once in `{}`",
            self.column, self.record
        )
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(record: &str, column: &str) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumn {
            record: record.into(),
            column: column.into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
