//! FFmpeg-based encoder implementation.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

use crate::config::{EncodeParams, EncoderConfig};

use super::error::EncoderError;
use super::traits::Encoder;

/// FFmpeg-based encoder implementation.
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    /// Creates a new FFmpeg encoder with the given configuration.
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Creates an encoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EncoderConfig::default())
    }

    /// Builds ffmpeg arguments for one audio-only encode.
    ///
    /// Paths are passed through as `OsString` so non-UTF-8 names reach
    /// ffmpeg byte for byte.
    fn build_args(
        &self,
        input_path: &Path,
        output_path: &Path,
        params: &EncodeParams,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-nostdin".into(),
            "-hide_banner".into(),
            "-loglevel".into(),
            self.config.log_level.clone().into(),
            "-y".into(), // Overwrite output
            "-i".into(),
            input_path.as_os_str().to_os_string(),
        ];

        // Drop cover art and any other non-audio streams
        args.extend([OsString::from("-map"), "0:a".into()]);

        args.extend([
            OsString::from("-c:a"),
            params.codec.clone().into(),
            "-b:a".into(),
            format!("{}k", params.bitrate_kbps).into(),
            "-ar".into(),
            params.sample_rate_hz.to_string().into(),
            "-ac".into(),
            params.channels.to_string().into(),
        ]);

        args.push(output_path.as_os_str().to_os_string());

        args
    }

    fn spawn_error(&self, e: std::io::Error) -> EncoderError {
        if e.kind() == std::io::ErrorKind::NotFound {
            EncoderError::NotFound {
                path: self.config.ffmpeg_path.clone(),
            }
        } else {
            EncoderError::Io(e)
        }
    }
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        let output = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(EncoderError::failed(
                format!("`{} -version` failed", self.config.ffmpeg_path.display()),
                Some(String::from_utf8_lossy(&output.stderr).into_owned()),
            ));
        }

        Ok(())
    }

    async fn encode(
        &self,
        input: &Path,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<(), EncoderError> {
        let start = Instant::now();
        let args = self.build_args(input, output, params);

        let result = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            return Err(EncoderError::failed(
                format!("FFmpeg exited with code: {:?}", result.status.code()),
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        debug!(
            "Encoded {} in {} ms",
            output.display(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
