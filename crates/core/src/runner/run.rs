//! Run driver implementation.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info};

use crate::config::Config;
use crate::converter::{ConvertOptions, Converter};
use crate::encoder::Encoder;
use crate::library::scan_library;

use super::error::RunError;
use super::types::{RunProgress, RunSummary};

/// Runs the whole library through `encoder` using the flags in `config`.
pub async fn run<E: Encoder>(
    config: &Config,
    encoder: E,
    progress_tx: Option<mpsc::Sender<RunProgress>>,
) -> Result<RunSummary, RunError> {
    let converter = Converter::new(
        encoder,
        &config.library,
        config.encoder.params.clone(),
        ConvertOptions {
            overwrite: config.replace,
            verbose: config.verbose,
        },
    );
    run_library(config, &converter, progress_tx).await
}

/// Scans the input root, then converts every job in traversal order.
///
/// One progress event is sent before each job. Sends never block: a slow
/// or dropped receiver loses events instead of stalling the run.
pub async fn run_library<E: Encoder>(
    config: &Config,
    converter: &Converter<E>,
    progress_tx: Option<mpsc::Sender<RunProgress>>,
) -> Result<RunSummary, RunError> {
    info!("Scanning input library ({})", config.input_root.display());
    let scan = scan_library(
        &config.input_root,
        &config.output_root,
        &config.library,
        config.verbose,
    )
    .await?;

    let total = scan.jobs.len();
    info!(
        "Found {} tracks to convert ({} entries ignored)",
        total,
        scan.skipped.len()
    );

    let mut summary = RunSummary {
        total,
        ignored: scan.skipped.len(),
        ..Default::default()
    };

    info!("Converting files into {}", config.output_root.display());
    for (i, job) in scan.jobs.iter().enumerate() {
        if let Some(ref tx) = progress_tx {
            let progress = RunProgress {
                index: i + 1,
                total,
                label: job.label(),
            };
            if let Err(TrySendError::Full(progress)) = tx.try_send(progress) {
                debug!(
                    "Progress receiver full, dropped update {}/{}",
                    progress.index, progress.total
                );
            }
        }

        let outcome = converter.convert(job).await?;
        summary.record(&outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EncoderConfig, LibraryConfig};
    use crate::testing::{fixtures, MockEncoder};
    use tempfile::TempDir;

    fn config(input: &TempDir, output: &TempDir) -> Config {
        Config {
            input_root: input.path().to_path_buf(),
            output_root: output.path().to_path_buf(),
            replace: false,
            verbose: true,
            library: LibraryConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_run_reports_progress_per_job() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fixtures::library(
            input.path(),
            &["A/X/1.flac", "A/X/2.flac", "A/X/cover.jpg"],
        );
        let (tx, mut rx) = mpsc::channel(16);

        let summary = run(&config(&input, &output), MockEncoder::new(), Some(tx))
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.ignored, 1);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].index, 1);
        assert_eq!(events[1].index, 2);
        assert!(events.iter().all(|e| e.total == 2));
        assert!(events.iter().all(|e| e.label.starts_with("A - X - ")));
    }

    #[tokio::test]
    async fn test_run_survives_dropped_receiver() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fixtures::library(input.path(), &["A/X/1.flac", "A/X/2.flac"]);
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let summary = run(&config(&input, &output), MockEncoder::new(), Some(tx))
            .await
            .unwrap();

        assert_eq!(summary.converted, 2);
    }

    #[tokio::test]
    async fn test_run_full_receiver_drops_updates_without_stalling() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fixtures::library(input.path(), &["A/X/1.flac", "A/X/2.flac", "A/X/3.flac"]);
        let (tx, mut rx) = mpsc::channel(1);

        let summary = run(&config(&input, &output), MockEncoder::new(), Some(tx))
            .await
            .unwrap();

        assert_eq!(summary.converted, 3);
        let first = rx.recv().await.unwrap();
        assert_eq!(first.index, 1);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_run_missing_input_is_fatal() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let mut config = config(&input, &output);
        config.input_root = input.path().join("missing");

        let err = run(&config, MockEncoder::new(), None).await.unwrap_err();

        assert!(matches!(err, RunError::Scan(_)));
    }
}
