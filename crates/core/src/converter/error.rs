//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the run.
///
/// Encoder failures are not represented here; they are recovered per job
/// and reported as [`JobOutcome::Failed`](super::JobOutcome::Failed).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not carry the lossless extension.
    #[error("Invalid file type: {path}")]
    InvalidInput { path: PathBuf },

    /// Output directory does not exist and could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
