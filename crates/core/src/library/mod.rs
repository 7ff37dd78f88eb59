//! Library scanner.
//!
//! Walks a three-level `root/artist/album/track` hierarchy and turns every
//! lossless track into a [`ConversionJob`] whose output path mirrors the
//! input layout under the output root.
//!
//! ```text
//! library
//! ├── artist_1
//! │   ├── album_1
//! │   │   ├── track_1.flac
//! │   │   └── cover.jpg      (skipped)
//! │   └── album_2
//! └── artist_2
//! ```

mod error;
mod scanner;
mod types;

pub use error::ScanError;
pub use scanner::{has_extension, output_path_for, scan_library};
pub use types::{ConversionJob, LibraryScan, SkipReason, SkippedEntry};
