use super::Error;
use std::path::{Path, PathBuf};

/// Error when a source unit is not valid Rust, or a parse request is
/// malformed (empty type name or path).
#[derive(Debug)]
pub(super) struct ParseFailed {
    path: PathBuf,
    message: Box<str>,
}

impl std::error::Error for ParseFailed {}

impl core::fmt::Display for ParseFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to parse {}: {}", self.path.display(), self.message)
    }
}

impl Error {
    /// Creates a parse error from a `syn` syntax error. Only the message is
    /// kept, so the error stays `Send` and `Sync`.
    pub fn syntax(path: &Path, err: syn::Error) -> Error {
        Error::parse_failed(path, err.to_string())
    }

    /// Creates a parse error with a plain message.
    pub fn parse_failed(path: &Path, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ParseFailed(ParseFailed {
            path: path.to_path_buf(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a parse error.
    pub fn is_parse_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ParseFailed(_))
    }
}
