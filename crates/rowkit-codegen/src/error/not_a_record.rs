use super::Error;

/// Error when a declaration exists but cannot be mapped as a record.
///
/// This occurs when:
/// - the item is a tuple or unit struct
/// - the struct has generic parameters
#[derive(Debug)]
pub(super) struct NotARecord {
    name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for NotARecord {}

impl core::fmt::Display for NotARecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` is not a record: {}", self.name, self.reason)
    }
}

impl Error {
    /// Creates a not-a-record error.
    pub fn not_a_record(name: &str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotARecord(NotARecord {
            name: name.into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a not-a-record error.
    pub fn is_not_a_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotARecord(_))
    }
}
