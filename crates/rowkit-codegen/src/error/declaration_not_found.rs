use super::Error;
use std::path::{Path, PathBuf};

/// Error when the requested struct is not declared in the source unit.
#[derive(Debug)]
pub(super) struct DeclarationNotFound {
    name: Box<str>,
    path: PathBuf,
}

impl std::error::Error for DeclarationNotFound {}

impl core::fmt::Display for DeclarationNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "struct `{}` not found in {}",
            self.name,
            self.path.display()
        )
    }
}

impl Error {
    /// Creates a declaration-not-found error.
    pub fn declaration_not_found(name: &str, path: &Path) -> Error {
        Error::from(super::ErrorKind::DeclarationNotFound(DeclarationNotFound {
            name: name.into(),
            path: path.to_path_buf(),
        }))
    }

    /// Returns `true` if this error is a declaration-not-found error.
    pub fn is_declaration_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DeclarationNotFound(_))
    }
}
