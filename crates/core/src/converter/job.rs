//! Single-job conversion.

use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::{EncodeParams, LibraryConfig};
use crate::encoder::Encoder;
use crate::library::{has_extension, ConversionJob};

use super::error::ConvertError;
use super::types::{ConvertOptions, JobOutcome};

/// Converts jobs one at a time through an [`Encoder`].
pub struct Converter<E: Encoder> {
    encoder: E,
    input_extension: String,
    params: EncodeParams,
    options: ConvertOptions,
}

impl<E: Encoder> Converter<E> {
    pub fn new(
        encoder: E,
        library: &LibraryConfig,
        params: EncodeParams,
        options: ConvertOptions,
    ) -> Self {
        Self {
            encoder,
            input_extension: library.input_extension.clone(),
            params,
            options,
        }
    }

    /// Get a reference to the encoder.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Converts one job.
    ///
    /// Encoder failures are logged and returned as [`JobOutcome::Failed`]
    /// after the partial output is removed. Only an input with the wrong
    /// extension or an uncreatable output directory are errors.
    pub async fn convert(&self, job: &ConversionJob) -> Result<JobOutcome, ConvertError> {
        if !has_extension(&job.input_path, &self.input_extension) {
            return Err(ConvertError::InvalidInput {
                path: job.input_path.clone(),
            });
        }

        if let Some(parent) = job.output_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConvertError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        if !self.options.overwrite && output_exists(&job.output_path).await {
            if self.options.verbose {
                info!("Output exists, skipping {}", job.output_path.display());
            }
            return Ok(JobOutcome::Skipped);
        }

        match self
            .encoder
            .encode(&job.input_path, &job.output_path, &self.params)
            .await
        {
            Ok(()) => {
                debug!("Converted {}", job.label());
                Ok(JobOutcome::Converted)
            }
            Err(e) => {
                let reason = e.detail();
                error!(
                    "Failed to convert {}: {}",
                    job.input_path.display(),
                    reason
                );
                remove_partial(&job.output_path).await;
                Ok(JobOutcome::Failed { reason })
            }
        }
    }
}

async fn output_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

// A leftover file would make the next run skip this track.
async fn remove_partial(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!("Removed partial output {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial output {}: {}", path.display(), e),
    }
}
