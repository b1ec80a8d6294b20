use std::path::PathBuf;

/// Configuration for a generator run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the scan starts from
    pub root_dir: PathBuf,

    /// File names that are scanned for record declarations
    pub model_files: Vec<String>,

    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            model_files: vec!["model.rs".to_string(), "models.rs".to_string()],
            skip_dirs: ["fixtures", ".git", "target", "testdata", "vendor"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = path.into();
        self
    }

    /// Replace the recognized model file names
    pub fn model_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_files = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the skipped directory names
    pub fn skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn is_model_file(&self, name: &str) -> bool {
        self.model_files.iter().any(|model_file| model_file == name)
    }

    pub(crate) fn is_skipped(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|skip_dir| skip_dir == name)
    }
}
