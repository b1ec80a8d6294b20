mod auto_increment;
mod declaration_not_found;
mod duplicate_column;
mod emit_failed;
mod invalid_attribute;
mod invalid_table_name;
mod io;
mod no_models;
mod not_a_record;
mod parse_failed;

use auto_increment::AutoIncrement;
use declaration_not_found::DeclarationNotFound;
use duplicate_column::DuplicateColumn;
use emit_failed::EmitFailed;
use invalid_attribute::InvalidAttribute;
use invalid_table_name::InvalidTableName;
use io::IoError;
use no_models::NoModels;
use not_a_record::NotARecord;
use parse_failed::ParseFailed;

/// An error produced while extracting or emitting record metadata.
///
/// Field-level problems never surface as an `Error`; they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the field is skipped. An `Error`
/// either aborts one declaration (parse failures, constraint contradictions)
/// or a whole run (no models, I/O).
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Io(IoError),
    ParseFailed(ParseFailed),
    DeclarationNotFound(DeclarationNotFound),
    NotARecord(NotARecord),
    InvalidAttribute(InvalidAttribute),
    InvalidTableName(InvalidTableName),
    AutoIncrement(AutoIncrement),
    DuplicateColumn(DuplicateColumn),
    NoModels(NoModels),
    EmitFailed(EmitFailed),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the error only invalidates the declaration it was
    /// raised for, so a directory scan can skip it and keep going.
    pub fn is_declaration_scoped(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::Io(_) | ErrorKind::NoModels(_) | ErrorKind::EmitFailed(_)
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Io(err) => core::fmt::Display::fmt(err, f),
            ParseFailed(err) => core::fmt::Display::fmt(err, f),
            DeclarationNotFound(err) => core::fmt::Display::fmt(err, f),
            NotARecord(err) => core::fmt::Display::fmt(err, f),
            InvalidAttribute(err) => core::fmt::Display::fmt(err, f),
            InvalidTableName(err) => core::fmt::Display::fmt(err, f),
            AutoIncrement(err) => core::fmt::Display::fmt(err, f),
            DuplicateColumn(err) => core::fmt::Display::fmt(err, f),
            NoModels(err) => core::fmt::Display::fmt(err, f),
            EmitFailed(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Box::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn declaration_scope() {
        assert!(Error::auto_increment("User", "name", "text").is_declaration_scoped());
        assert!(Error::declaration_not_found("User", Path::new("models.rs")).is_declaration_scoped());
        assert!(!Error::no_models(Path::new(".")).is_declaration_scoped());
    }

    #[test]
    fn display_messages() {
        let err = Error::auto_increment("User", "name", "text");
        assert_eq!(
            err.to_string(),
            "`autoincrement` is not allowed on text field `User.name`"
        );

        let err = Error::no_models(Path::new("src"));
        assert_eq!(err.to_string(), "no models found under src");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn io_source_is_exposed() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io(Path::new("models.rs"), io);
        assert!(err.is_io());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to access models.rs: gone");
    }
}
