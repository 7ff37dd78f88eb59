use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension of the lossless files the scanner picks up.
pub const INPUT_EXTENSION: &str = "flac";

/// Extension of the files the encoder produces.
pub const OUTPUT_EXTENSION: &str = "m4a";

/// Encoder codec name passed to ffmpeg.
pub const AUDIO_CODEC: &str = "aac";

/// Target channel count (stereo).
pub const CHANNELS: u8 = 2;

/// Target sample rate in Hz.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Target bitrate in kbit/s.
pub const BITRATE_KBPS: u32 = 192;

/// Root configuration for one run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Root of the lossless library (`root/artist/album/track`).
    pub input_root: PathBuf,
    /// Root the converted library is mirrored into.
    pub output_root: PathBuf,
    /// Re-encode tracks whose output already exists.
    #[serde(default)]
    pub replace: bool,
    /// Log skipped files and existing outputs.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
}

/// File extensions of the two libraries, without the leading dot.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LibraryConfig {
    #[serde(default = "default_input_extension")]
    pub input_extension: String,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            input_extension: default_input_extension(),
            output_extension: default_output_extension(),
        }
    }
}

fn default_input_extension() -> String {
    INPUT_EXTENSION.to_string()
}

fn default_output_extension() -> String {
    OUTPUT_EXTENSION.to_string()
}

/// External encoder configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Path to the ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,
    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub params: EncodeParams,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            log_level: default_log_level(),
            params: EncodeParams::default(),
        }
    }
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_log_level() -> String {
    "error".to_string()
}

/// Fixed target parameters of the lossy output.
///
/// Only the audio streams of the input are mapped into the output.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncodeParams {
    pub codec: String,
    pub channels: u8,
    pub sample_rate_hz: u32,
    pub bitrate_kbps: u32,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            codec: AUDIO_CODEC.to_string(),
            channels: CHANNELS,
            sample_rate_hz: SAMPLE_RATE_HZ,
            bitrate_kbps: BITRATE_KBPS,
        }
    }
}
