use figment::{providers::Serialized, Figment};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

use super::{
    types::{Config, EncoderConfig, LibraryConfig},
    ConfigError,
};

/// Values supplied on the command line for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunArgs {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub replace: bool,
    pub verbose: bool,
    /// Overrides `encoder.ffmpeg_path` when set.
    #[serde(skip)]
    pub ffmpeg_path: Option<PathBuf>,
}

/// Fold the built-in constants and the command line values into a [`Config`].
///
/// Both roots are made absolute against the current directory and
/// lexically normalized.
pub fn load_config(args: &RunArgs) -> Result<Config, ConfigError> {
    let mut figment = Figment::new()
        .merge(Serialized::default("library", LibraryConfig::default()))
        .merge(Serialized::default("encoder", EncoderConfig::default()))
        .merge(Serialized::defaults(args));

    if let Some(ref ffmpeg_path) = args.ffmpeg_path {
        figment = figment.merge(Serialized::default("encoder.ffmpeg_path", ffmpeg_path));
    }

    let mut config: Config = figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.input_root = normalize(&absolute(&config.input_root)?);
    config.output_root = normalize(&absolute(&config.output_root)?);

    Ok(config)
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|e| {
        ConfigError::ParseError(format!("cannot resolve {}: {}", path.display(), e))
    })
}

/// Drops `.` segments and folds `..` into its parent without touching the
/// filesystem. Symlinks are not resolved.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, output: &str) -> RunArgs {
        RunArgs {
            input_root: PathBuf::from(input),
            output_root: PathBuf::from(output),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(&args("/music/flac", "/music/aac")).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/music/flac"));
        assert_eq!(config.output_root, PathBuf::from("/music/aac"));
        assert!(!config.replace);
        assert!(!config.verbose);
        assert_eq!(config.library, LibraryConfig::default());
        assert_eq!(config.encoder, EncoderConfig::default());
    }

    #[test]
    fn test_load_config_flags() {
        let mut run = args("/in", "/out");
        run.replace = true;
        run.verbose = true;
        let config = load_config(&run).unwrap();
        assert!(config.replace);
        assert!(config.verbose);
    }

    #[test]
    fn test_load_config_ffmpeg_override() {
        let mut run = args("/in", "/out");
        run.ffmpeg_path = Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        let config = load_config(&run).unwrap();
        assert_eq!(
            config.encoder.ffmpeg_path,
            PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        // The rest of the encoder section keeps its defaults
        assert_eq!(config.encoder.log_level, "error");
        assert_eq!(config.encoder.params.bitrate_kbps, 192);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/music/../music/flac")), PathBuf::from("/music/flac"));
        assert_eq!(normalize(Path::new("/music/./flac/")), PathBuf::from("/music/flac"));
        assert_eq!(normalize(Path::new("/music/flac/out/..")), PathBuf::from("/music/flac"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn test_load_config_normalizes_roots() {
        let config = load_config(&args("/music/../music/flac", "/music/./aac")).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/music/flac"));
        assert_eq!(config.output_root, PathBuf::from("/music/aac"));
    }

    #[test]
    fn test_load_config_relative_roots_become_absolute() {
        let config = load_config(&args("library", "converted")).unwrap();
        assert!(config.input_root.is_absolute());
        assert!(config.output_root.is_absolute());
        assert!(config.input_root.ends_with("library"));
        assert!(config.output_root.ends_with("converted"));
    }
}
