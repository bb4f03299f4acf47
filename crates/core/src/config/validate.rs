use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Staging root is non-empty
/// - Upstream credentials and destination folders are present
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.staging.root.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "staging.root cannot be empty".to_string(),
        ));
    }

    if config.ytdlp.binary.is_empty() {
        return Err(ConfigError::ValidationError(
            "ytdlp.binary cannot be empty".to_string(),
        ));
    }

    if config.vimeo.access_token.is_empty() {
        return Err(ConfigError::ValidationError(
            "vimeo.access_token cannot be empty".to_string(),
        ));
    }

    if config.drive.access_token.is_empty() {
        return Err(ConfigError::ValidationError(
            "drive.access_token cannot be empty".to_string(),
        ));
    }

    if config.drive.youtube_folder_id.is_empty() || config.drive.vimeo_folder_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "drive.youtube_folder_id and drive.vimeo_folder_id must be set".to_string(),
        ));
    }

    Ok(())
}
