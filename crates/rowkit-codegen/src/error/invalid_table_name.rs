use super::Error;

/// Error when a hand-written `table_name` exists but is not a method taking
/// `self` that returns a string literal, so its value cannot be known
/// statically.
#[derive(Debug)]
pub(super) struct InvalidTableName {
    record: Box<str>,
}

impl std::error::Error for InvalidTableName {}

impl core::fmt::Display for InvalidTableName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`{}::table_name` must take `&self` and return a string literal",
            self.record
        )
    }
}

impl Error {
    /// Creates an invalid table name error.
    pub fn invalid_table_name(record: &str) -> Error {
        Error::from(super::ErrorKind::InvalidTableName(InvalidTableName {
            record: record.into(),
        }))
    }

    /// Returns `true` if this error is an invalid table name error.
    pub fn is_invalid_table_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTableName(_))
    }
}
