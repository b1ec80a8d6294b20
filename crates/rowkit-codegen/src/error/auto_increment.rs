use super::Error;

/// Error when `autoincrement` is requested on a field whose storage type is
/// not numeric.
///
/// This is a contradiction in the declaration itself, so it fails the whole
/// declaration instead of dropping the flag.
#[derive(Debug)]
pub(super) struct AutoIncrement {
    record: Box<str>,
    field: Box<str>,
    storage: &'static str,
}

impl std::error::Error for AutoIncrement {}

impl core::fmt::Display for AutoIncrement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`autoincrement` is not allowed on {} field `{}.{}`",
            self.storage, self.record, self.field
        )
    }
}

impl Error {
    /// Creates an auto-increment contradiction error.
    pub fn auto_increment(record: &str, field: &str, storage: &'static str) -> Error {
        Error::from(super::ErrorKind::AutoIncrement(AutoIncrement {
            record: record.into(),
            field: field.into(),
            storage,
        }))
    }

    /// Returns `true` if this error is an auto-increment contradiction.
    pub fn is_auto_increment(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AutoIncrement(_))
    }
}
