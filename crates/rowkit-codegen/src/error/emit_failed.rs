use super::Error;

/// Error when a resolved declaration cannot be turned back into Rust code.
#[derive(Debug)]
pub(super) struct EmitFailed {
    message: Box<str>,
}

impl std::error::Error for EmitFailed {}

impl core::fmt::Display for EmitFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to emit generated unit: {}", self.message)
    }
}

impl Error {
    /// Creates an emit error.
    pub fn emit_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmitFailed(EmitFailed {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an emit error.
    pub fn is_emit_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmitFailed(_))
    }
}
