use super::Error;
use std::path::{Path, PathBuf};

/// Error when a source unit, directory or generated unit cannot be accessed.
#[derive(Debug)]
pub(super) struct IoError {
    path: PathBuf,
    inner: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to access {}: {}", self.path.display(), self.inner)
    }
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: &Path, err: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError {
            path: path.to_path_buf(),
            inner: err,
        }))
    }

    /// Returns `true` if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Io(_))
    }
}
