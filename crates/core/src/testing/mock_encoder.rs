//! Mock encoder for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::EncodeParams;
use crate::encoder::{Encoder, EncoderError};

/// Bytes written by a successful mock encode.
pub const MOCK_OUTPUT: &[u8] = b"mock m4a";

/// Bytes left behind by a failed mock encode.
pub const MOCK_PARTIAL: &[u8] = b"partial";

/// A recorded encoder invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedEncode {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: EncodeParams,
    /// Whether the encode succeeded.
    pub success: bool,
}

/// Mock implementation of the Encoder trait.
///
/// Provides controllable behavior for testing:
/// - Track encoder invocations for assertions
/// - Simulate failure for the next call or for specific inputs
/// - Leave a partially written output behind on failure, like a real
///   encoder interrupted mid-stream
///
/// Clones share state, so a clone can be handed to the code under test
/// while the original is kept for assertions.
#[derive(Debug, Clone)]
pub struct MockEncoder {
    /// Recorded invocations.
    calls: Arc<RwLock<Vec<RecordedEncode>>>,
    /// If set, the next encode will fail with this error.
    next_error: Arc<RwLock<Option<EncoderError>>>,
    /// Inputs that always fail.
    failing_inputs: Arc<RwLock<HashSet<PathBuf>>>,
    /// Whether a failed encode writes partial output first.
    leave_partial: Arc<RwLock<bool>>,
}

impl Default for MockEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEncoder {
    /// Create a new mock encoder.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            failing_inputs: Arc::new(RwLock::new(HashSet::new())),
            leave_partial: Arc::new(RwLock::new(true)),
        }
    }

    /// Get all recorded invocations.
    pub async fn recorded_encodes(&self) -> Vec<RecordedEncode> {
        self.calls.read().await.clone()
    }

    /// Get the number of invocations.
    pub async fn encode_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Clear recorded invocations.
    pub async fn clear_recorded(&self) {
        self.calls.write().await.clear();
    }

    /// Configure the next encode to fail with the given error.
    pub async fn set_next_error(&self, error: EncoderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every encode of `input` fail.
    pub async fn fail_for(&self, input: impl AsRef<Path>) {
        self.failing_inputs
            .write()
            .await
            .insert(input.as_ref().to_path_buf());
    }

    /// Choose whether failures leave partial output on disk.
    pub async fn set_leave_partial(&self, leave: bool) {
        *self.leave_partial.write().await = leave;
    }

    async fn take_error(&self, input: &Path) -> Option<EncoderError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Some(err);
        }
        if self.failing_inputs.read().await.contains(input) {
            return Some(EncoderError::failed(
                "FFmpeg exited with code: Some(1)",
                Some(format!("{}: Invalid data found when processing input", input.display())),
            ));
        }
        None
    }
}

#[async_trait]
impl Encoder for MockEncoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        Ok(())
    }

    async fn encode(
        &self,
        input: &Path,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<(), EncoderError> {
        let error = self.take_error(input).await;

        let result = match error {
            Some(err) => {
                if *self.leave_partial.read().await {
                    tokio::fs::write(output, MOCK_PARTIAL).await?;
                }
                Err(err)
            }
            None => tokio::fs::write(output, MOCK_OUTPUT)
                .await
                .map_err(EncoderError::from),
        };

        self.calls.write().await.push(RecordedEncode {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            params: params.clone(),
            success: result.is_ok(),
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_successful_encode_writes_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.m4a");
        let encoder = MockEncoder::new();

        encoder
            .encode(Path::new("/in.flac"), &output, &EncodeParams::default())
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), MOCK_OUTPUT);
        let calls = encoder.recorded_encodes().await;
        assert_eq!(calls.len(), 1);
        assert!(calls[0].success);
        assert_eq!(calls[0].input, PathBuf::from("/in.flac"));
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.m4a");
        let encoder = MockEncoder::new();
        encoder
            .set_next_error(EncoderError::failed("test error", None))
            .await;

        let result = encoder
            .encode(Path::new("/in.flac"), &output, &EncodeParams::default())
            .await;
        assert!(result.is_err());
        assert_eq!(std::fs::read(&output).unwrap(), MOCK_PARTIAL);

        let result = encoder
            .encode(Path::new("/in.flac"), &output, &EncodeParams::default())
            .await;
        assert!(result.is_ok());

        let calls = encoder.recorded_encodes().await;
        assert!(!calls[0].success);
        assert!(calls[1].success);
    }

    #[tokio::test]
    async fn test_fail_for_without_partial() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.m4a");
        let encoder = MockEncoder::new();
        encoder.fail_for("/bad.flac").await;
        encoder.set_leave_partial(false).await;

        let result = encoder
            .encode(Path::new("/bad.flac"), &output, &EncodeParams::default())
            .await;
        assert!(matches!(result, Err(EncoderError::Failed { .. })));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let dir = TempDir::new().unwrap();
        let encoder = MockEncoder::new();
        let handle = encoder.clone();

        handle
            .encode(
                Path::new("/in.flac"),
                &dir.path().join("out.m4a"),
                &EncodeParams::default(),
            )
            .await
            .unwrap();

        assert_eq!(encoder.encode_count().await, 1);
        encoder.clear_recorded().await;
        assert_eq!(handle.encode_count().await, 0);
    }
}
