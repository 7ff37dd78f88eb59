use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flacdown_core::{load_config, validate_config, Encoder, FfmpegEncoder, RunArgs, RunProgress};

/// Buffer size for the progress channel
const PROGRESS_BUFFER_SIZE: usize = 64;

/// Mirror an artist/album/track FLAC library into AAC (.m4a) with ffmpeg.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
struct Args {
    /// Root of the lossless library.
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Root the converted library is written to.
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Re-encode tracks that already exist in the output library.
    #[arg(short, long)]
    replace: bool,

    /// Log ignored files and skipped tracks.
    #[arg(short, long)]
    verbose: bool,

    /// Path to the ffmpeg binary.
    #[arg(long, value_name = "PATH")]
    ffmpeg: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,flacdown=debug,flacdown_core=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run(args: Args) -> Result<()> {
    let run_args = RunArgs {
        input_root: args.input,
        output_root: args.output,
        replace: args.replace,
        verbose: args.verbose,
        ffmpeg_path: args.ffmpeg,
    };

    let config = load_config(&run_args).context("Failed to build configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    let encoder = FfmpegEncoder::new(config.encoder.clone());
    encoder
        .validate()
        .await
        .with_context(|| format!("Encoder {} is not usable", encoder.name()))?;

    let (progress_tx, progress_rx) = mpsc::channel(PROGRESS_BUFFER_SIZE);
    let progress_handle = tokio::spawn(log_progress(progress_rx));

    let summary = flacdown_core::run(&config, encoder, Some(progress_tx))
        .await
        .with_context(|| format!("Failed to convert {}", config.input_root.display()))?;

    // The sender was dropped with the run, so the logger drains and exits
    let _ = progress_handle.await;

    info!(
        "Done: {} converted, {} skipped, {} failed, {} ignored",
        summary.converted, summary.skipped, summary.failed, summary.ignored
    );

    Ok(())
}

async fn log_progress(mut rx: mpsc::Receiver<RunProgress>) {
    while let Some(progress) = rx.recv().await {
        info!("[{}/{}] {}", progress.index, progress.total, progress.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["flacdown", "-i", "in", "-o", "out", "-r", "-v"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert!(args.replace);
        assert!(args.verbose);
        assert!(args.ffmpeg.is_none());
    }

    #[test]
    fn test_long_flags_default_to_off() {
        let args = Args::try_parse_from([
            "flacdown",
            "--input",
            "in",
            "--output",
            "out",
            "--ffmpeg",
            "/opt/ffmpeg",
        ])
        .unwrap();
        assert!(!args.replace);
        assert!(!args.verbose);
        assert_eq!(args.ffmpeg, Some(PathBuf::from("/opt/ffmpeg")));
    }

    #[test]
    fn test_input_and_output_required() {
        assert!(Args::try_parse_from(["flacdown", "-i", "in"]).is_err());
        assert!(Args::try_parse_from(["flacdown", "-o", "out"]).is_err());
    }
}
