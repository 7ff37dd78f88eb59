//! Encoder module wrapping the external audio codec.
//!
//! The encoder is treated as a black box: it receives an input path, an
//! output path and the fixed [`EncodeParams`](crate::config::EncodeParams),
//! and either writes a valid output file or fails.
//!
//! # Example
//!
//! ```ignore
//! use flacdown_core::encoder::{Encoder, FfmpegEncoder};
//! use flacdown_core::config::{EncodeParams, EncoderConfig};
//!
//! let encoder = FfmpegEncoder::new(EncoderConfig::default());
//! encoder.validate().await?;
//! encoder
//!     .encode(Path::new("in.flac"), Path::new("out.m4a"), &EncodeParams::default())
//!     .await?;
//! ```

mod error;
mod ffmpeg;
mod traits;

pub use error::EncoderError;
pub use ffmpeg::FfmpegEncoder;
pub use traits::Encoder;
