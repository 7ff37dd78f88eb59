//! Trait definitions for the encoder module.

use async_trait::async_trait;
use std::path::Path;

use crate::config::EncodeParams;

use super::error::EncoderError;

/// An external codec that turns one lossless file into one lossy file.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Returns the name of this encoder implementation.
    fn name(&self) -> &str;

    /// Validates that the encoder is installed and runnable.
    async fn validate(&self) -> Result<(), EncoderError>;

    /// Encodes `input` into `output`, replacing any file already at `output`.
    ///
    /// Runs to completion before returning. On failure `output` may be left
    /// partially written.
    async fn encode(
        &self,
        input: &Path,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<(), EncoderError>;
}
