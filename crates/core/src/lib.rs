pub mod config;
pub mod converter;
pub mod encoder;
pub mod library;
pub mod runner;
pub mod testing;

pub use config::{
    load_config, validate_config, Config, ConfigError, EncodeParams, EncoderConfig,
    LibraryConfig, RunArgs,
};
pub use converter::{ConvertError, ConvertOptions, Converter, JobOutcome};
pub use encoder::{Encoder, EncoderError, FfmpegEncoder};
pub use library::{scan_library, ConversionJob, LibraryScan, ScanError, SkipReason, SkippedEntry};
pub use runner::{run, run_library, RunError, RunProgress, RunSummary};
