//! Error types for linetallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("failed to decode file '{path}' as UTF-8")]
    Decode { path: PathBuf },

    /// Failed to query the on-disk size of a file
    #[error("failed to stat file '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the structured report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
