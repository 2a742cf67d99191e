//! # linetallylib
//!
//! Line, character and size statistics for the source files under a fixed
//! set of root directories.
//!
//! ## Overview
//!
//! Every line of a matching file is one of:
//!
//! - **Code**: anything that is not blank and not a comment
//! - **Comment**: the trimmed line starts with `//` (this covers `///` and `//!`)
//! - **Empty**: whitespace only
//!
//! Each file also reports its character count and its size on disk. The
//! tool scans `cli/`, `core/` and `daemon/` for `.rs` files, prints one line
//! per file and finishes with a grand total.
//!
//! Comment detection is a prefix check on each line. There is no lexer, so
//! block comments count as code.
//!
//! ## Example
//!
//! ```rust
//! use linetallylib::{analyze_file, run, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("core/src")).unwrap();
//! let file_path = dir.path().join("core/src/lib.rs");
//! fs::write(&file_path, "// core\npub fn hello() {}\n").unwrap();
//!
//! // A single file
//! let stat = analyze_file(&file_path).unwrap();
//! assert_eq!(stat.code_lines, 1);
//! assert_eq!(stat.comment_lines, 1);
//!
//! // The whole report
//! let mut out = Vec::new();
//! let total = run(dir.path(), &ScanOptions::new(), &mut out).unwrap();
//! assert_eq!(total.total_lines, 2);
//! ```

pub mod analyzer;
pub mod classify;
pub mod error;
pub mod options;
pub mod report;
pub mod scanner;
pub mod stats;

pub use analyzer::{analyze_file, analyze_reader, analyze_str};
pub use classify::{classify_line, LineKind};
pub use error::ScanError;
pub use options::{ScanOptions, DEFAULT_EXTENSION, DEFAULT_ROOTS};
pub use report::{
    collect_report, format_file_line, format_size, render_report, run, scan_root,
    write_grand_total, write_root, Report, RootReport,
};
pub use scanner::{discover_files, matches_extension, scan_directory};
pub use stats::{FileStat, GrandTotal, LineCounts};

/// Result type for linetallylib operations
pub type Result<T> = std::result::Result<T, ScanError>;
