//! Converter module for processing one conversion job.
//!
//! Ensures the output directory exists, honours the overwrite flag, invokes
//! the [`Encoder`](crate::encoder::Encoder) and cleans up partial output
//! when the encoder fails so that a later run can retry the track.
//!
//! # Example
//!
//! ```ignore
//! use flacdown_core::converter::{ConvertOptions, Converter, JobOutcome};
//!
//! let converter = Converter::new(encoder, &config.library, params, ConvertOptions::default());
//! match converter.convert(&job).await? {
//!     JobOutcome::Converted => {}
//!     JobOutcome::Skipped => {}
//!     JobOutcome::Failed { reason } => eprintln!("{}", reason),
//! }
//! ```

mod error;
mod job;
mod types;

pub use error::ConvertError;
pub use job::Converter;
pub use types::{ConvertOptions, JobOutcome};
