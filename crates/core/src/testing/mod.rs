//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use flacdown_core::testing::{fixtures, MockEncoder};
//!
//! let encoder = MockEncoder::new();
//! encoder.fail_for("/library/artist/album/broken.flac").await;
//!
//! // Run the converter...
//!
//! assert_eq!(encoder.encode_count().await, 3);
//! ```

mod mock_encoder;

pub use mock_encoder::{MockEncoder, RecordedEncode};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::{Path, PathBuf};

    /// Write a placeholder file at `root/relative`, creating parent directories.
    pub fn write_file(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(&path, b"fLaC").expect("write fixture file");
        path
    }

    /// Build a library from `artist/album/file` relative paths.
    pub fn library(root: &Path, files: &[&str]) -> Vec<PathBuf> {
        files.iter().map(|f| write_file(root, f)).collect()
    }
}
