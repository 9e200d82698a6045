//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum length for user agent.
const MIN_USER_AGENT_LENGTH: usize = 40;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_ytdlp_path(&config.youtube.ytdlp_path)?;
    validate_timeout("youtube.timeout_seconds", config.youtube.timeout_seconds)?;
    validate_numeric_id("instagram.doc_id", &config.instagram.doc_id)?;
    validate_numeric_id("instagram.app_id", &config.instagram.app_id)?;
    validate_user_agent(&config.instagram.user_agent)?;
    validate_timeout("instagram.timeout_seconds", config.instagram.timeout_seconds)?;

    Ok(())
}

/// Validate the yt-dlp executable setting.
pub fn validate_ytdlp_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "youtube.ytdlp_path".to_string(),
            message: "Path to the yt-dlp executable cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate a request timeout.
pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate a numeric Instagram identifier (doc id, app id).
pub fn validate_numeric_id(field: &str, value: &str) -> Result<()> {
    let id_pattern = Regex::new(r"^\d{6,}$").unwrap();

    if !id_pattern.is_match(value) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' is not a numeric identifier", value),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "instagram.user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters (got {})",
                MIN_USER_AGENT_LENGTH,
                user_agent.len()
            ),
        });
    }

    Ok(())
}
