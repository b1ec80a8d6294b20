use std::path::{Path, PathBuf};

/// How serious a [`Diagnostic`] is. Neither level stops a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A field or relation was skipped; the generated code is still coherent.
    Warning,

    /// A whole declaration or source file was skipped.
    Error,
}

/// A non-fatal problem found while extracting metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,

    /// Source unit the problem was found in, when known
    pub path: Option<PathBuf>,
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.severity {
            Severity::Warning => f.write_str("warning: ")?,
            Severity::Error => f.write_str("error: ")?,
        }
        f.write_str(&self.message)?;
        if let Some(path) = &self.path {
            write!(f, " ({})", path.display())?;
        }
        Ok(())
    }
}

/// The injectable diagnostics sink.
///
/// Without a callback every diagnostic is dropped. Nothing is ever written to
/// a fixed destination.
#[derive(Default)]
pub(crate) struct Log {
    sink: Option<Box<dyn FnMut(&Diagnostic)>>,
}

impl Log {
    pub(crate) fn new(sink: impl FnMut(&Diagnostic) + 'static) -> Log {
        Log {
            sink: Some(Box::new(sink)),
        }
    }

    pub(crate) fn warn(&mut self, path: Option<&Path>, message: impl Into<String>) {
        self.emit(Severity::Warning, path, message.into());
    }

    pub(crate) fn error(&mut self, path: Option<&Path>, message: impl Into<String>) {
        self.emit(Severity::Error, path, message.into());
    }

    fn emit(&mut self, severity: Severity, path: Option<&Path>, message: String) {
        if let Some(sink) = &mut self.sink {
            sink(&Diagnostic {
                severity,
                message,
                path: path.map(Path::to_path_buf),
            });
        }
    }
}

impl core::fmt::Debug for Log {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Log")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn unset_sink_discards() {
        let mut log = Log::default();
        log.warn(None, "nobody hears this");
    }

    #[test]
    fn sink_receives_diagnostics() {
        let seen = Rc::new(RefCell::new(vec![]));
        let captured = seen.clone();
        let mut log = Log::new(move |d| captured.borrow_mut().push(d.to_string()));

        log.warn(Some(Path::new("models.rs")), "skipping `User.born`");
        log.error(None, "skipping `Broken`");

        assert_eq!(
            *seen.borrow(),
            vec![
                "warning: skipping `User.born` (models.rs)".to_string(),
                "error: skipping `Broken`".to_string(),
            ]
        );
    }
}
