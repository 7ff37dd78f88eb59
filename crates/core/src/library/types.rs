//! Types for the library scanner.

use std::fmt;
use std::path::PathBuf;

/// One input-file-to-output-file conversion task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Artist directory name.
    pub artist: String,
    /// Album directory name.
    pub album: String,
    /// Track file name without extension.
    pub track: String,
    /// Absolute path of the lossless input.
    pub input_path: PathBuf,
    /// Absolute path the lossy output is written to.
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// Human readable `artist - album - track` label.
    pub fn label(&self) -> String {
        format!("{} - {} - {}", self.artist, self.album, self.track)
    }
}

/// Why the scanner passed over an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A track-level entry without the lossless extension.
    InvalidFileType,
    /// A file where an artist or album directory was expected.
    NotADirectory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileType => write!(f, "invalid file type"),
            Self::NotADirectory => write!(f, "not a directory"),
        }
    }
}

/// An entry that did not produce a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of scanning a library.
#[derive(Debug, Clone, Default)]
pub struct LibraryScan {
    /// Jobs in traversal order.
    pub jobs: Vec<ConversionJob>,
    /// Entries that were ignored.
    pub skipped: Vec<SkippedEntry>,
}
