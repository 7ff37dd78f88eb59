use super::{loader::normalize, types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Extensions are non-empty, dot-less and distinct
/// - The output root is not nested inside the input root
/// - Encoder parameters are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let library = &config.library;
    for (name, ext) in [
        ("input_extension", &library.input_extension),
        ("output_extension", &library.output_extension),
    ] {
        if ext.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "library.{} cannot be empty",
                name
            )));
        }
        if ext.starts_with('.') {
            return Err(ConfigError::ValidationError(format!(
                "library.{} must not start with a dot: {}",
                name, ext
            )));
        }
    }
    if library
        .input_extension
        .eq_ignore_ascii_case(&library.output_extension)
    {
        return Err(ConfigError::ValidationError(
            "input and output extensions must differ".to_string(),
        ));
    }

    // In-place runs are allowed; a distinct output root nested in the input
    // tree would be scanned as an artist.
    let input_root = normalize(&config.input_root);
    let output_root = normalize(&config.output_root);
    if output_root != input_root && output_root.starts_with(&input_root) {
        return Err(ConfigError::ValidationError(format!(
            "output root {} is inside input root {}",
            output_root.display(),
            input_root.display()
        )));
    }

    let params = &config.encoder.params;
    if params.channels == 0 {
        return Err(ConfigError::ValidationError(
            "encoder.params.channels cannot be 0".to_string(),
        ));
    }
    if params.sample_rate_hz == 0 {
        return Err(ConfigError::ValidationError(
            "encoder.params.sample_rate_hz cannot be 0".to_string(),
        ));
    }
    if params.bitrate_kbps == 0 {
        return Err(ConfigError::ValidationError(
            "encoder.params.bitrate_kbps cannot be 0".to_string(),
        ));
    }

    Ok(())
}
