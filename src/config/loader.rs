/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TrackerError::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| TrackerError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

/// Load from the given path if it exists, otherwise fall back to the
/// ALCHEMY_API_KEY environment variable with default settings.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    if path.as_ref().exists() {
        return load_config(path);
    }

    let api_key = std::env::var("ALCHEMY_API_KEY").unwrap_or_default();
    let config = Config {
        alchemy_api_key: api_key,
        ..Config::default()
    };
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.alchemy_api_key.is_empty() {
        return Err(TrackerError::ConfigError(
            "alchemy_api_key is empty (set it in config.toml or ALCHEMY_API_KEY)".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(TrackerError::ConfigError(
            "request_timeout_secs must be > 0".to_string(),
        ));
    }

    // Upstream rejects requests above its 1000-transfer page cap
    if config.max_transfers == 0 || config.max_transfers > 1000 {
        return Err(TrackerError::ConfigError(format!(
            "Invalid max_transfers: {} (must be 1..=1000)",
            config.max_transfers
        )));
    }

    Ok(())
}
