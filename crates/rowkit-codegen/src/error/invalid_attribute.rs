use super::Error;

/// Error when a `#[db]` attribute is not of the form `#[db("..")]` or
/// `#[db = ".."]`.
#[derive(Debug)]
pub(super) struct InvalidAttribute {
    record: Box<str>,
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidAttribute {}

impl core::fmt::Display for InvalidAttribute {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid #[db] attribute on `{}.{}`: {}",
            self.record, self.field, self.message
        )
    }
}

impl Error {
    /// Creates an invalid attribute error.
    pub fn invalid_attribute(record: &str, field: &str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidAttribute(InvalidAttribute {
            record: record.into(),
            field: field.into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid attribute error.
    pub fn is_invalid_attribute(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidAttribute(_))
    }
}
