//! Directory scanning.
//!
//! Walks a root recursively and analyzes every file whose name ends with
//! the configured extension. Symlinked directories are not descended into.
//! Any other entry with a matching name is analyzed, dangling symlinks
//! included, so an unreadable match aborts the scan. Entries that cannot be
//! listed are skipped with a warning.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::analyzer::analyze_file;
use crate::stats::FileStat;
use crate::Result;

/// Check whether a file name carries the extension.
///
/// This is a plain suffix test on the name, so `".rs"` matches `main.rs`
/// but not `main.RS` or `main.rs.bak`.
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(extension))
}

/// Find all files under `root` that match the extension.
///
/// Entries are visited in file-name order within each directory.
pub fn discover_files(root: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.path().is_dir() && matches_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Analyze every matching file under `root`.
///
/// The first file that cannot be read aborts the scan.
pub fn scan_directory(root: impl AsRef<Path>, extension: &str) -> Result<Vec<FileStat>> {
    let root = root.as_ref();
    let files = discover_files(root, extension)
        .into_iter()
        .map(analyze_file)
        .collect::<Result<Vec<_>>>()?;

    info!(root = %root.display(), files = files.len(), "scanned directory");
    Ok(files)
}
