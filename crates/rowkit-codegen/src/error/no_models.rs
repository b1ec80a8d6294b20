use super::Error;
use std::path::{Path, PathBuf};

/// Error when a whole directory scan produced no mappable declaration.
#[derive(Debug)]
pub(super) struct NoModels {
    root: PathBuf,
}

impl std::error::Error for NoModels {}

impl core::fmt::Display for NoModels {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no models found under {}", self.root.display())
    }
}

impl Error {
    /// Creates a no-models error for the scanned root.
    pub fn no_models(root: &Path) -> Error {
        Error::from(super::ErrorKind::NoModels(NoModels {
            root: root.to_path_buf(),
        }))
    }

    /// Returns `true` if this error is a no-models error.
    pub fn is_no_models(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoModels(_))
    }
}
