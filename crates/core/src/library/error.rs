//! Error types for the library scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a library scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A library directory could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}
