use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Engine section exists (enforced by serde)
/// - Engine URL is non-empty and http(s)
/// - Server port is not 0
/// - Upload ceiling is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Engine validation
    if config.engine.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "engine.url cannot be empty".to_string(),
        ));
    }
    if !config.engine.url.starts_with("http://") && !config.engine.url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "engine.url must be an http(s) URL, got '{}'",
            config.engine.url
        )));
    }
    if config.engine.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "engine.timeout_secs cannot be 0".to_string(),
        ));
    }

    // Intake validation
    if config.intake.max_upload_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "intake.max_upload_bytes cannot be 0".to_string(),
        ));
    }

    Ok(())
}
