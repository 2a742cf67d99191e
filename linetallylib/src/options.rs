//! Scan options: which roots to visit and which files to count.
//!
//! The tool itself always scans [`DEFAULT_ROOTS`] for [`DEFAULT_EXTENSION`]
//! files. The builder exists so tests can point the scanner at fixtures.

/// Root directories scanned, in report order.
pub const DEFAULT_ROOTS: [&str; 3] = ["cli", "core", "daemon"];

/// File name suffix a file must carry to be counted.
pub const DEFAULT_EXTENSION: &str = ".rs";

/// Options for a scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Root directory names, resolved against the base directory
    pub roots: Vec<String>,
    /// Required file name suffix (e.g. `.rs`)
    pub extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|r| r.to_string()).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ScanOptions {
    /// Create options with the fixed roots and extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root directory list.
    pub fn roots<S: Into<String>>(mut self, roots: impl IntoIterator<Item = S>) -> Self {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the required file name suffix.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}
