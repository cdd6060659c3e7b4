//! Core TOML config loading: read from a path or the platform default.

use crate::schema::TesseraConfig;
use crate::validation;
use std::path::Path;
use tessera_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text into a config, filling missing fields with defaults.
pub fn parse_config(content: &str) -> Result<TesseraConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load and validate config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<TesseraConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = parse_config(&content)?;
    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/tessera/config.toml`
///
/// If the file does not exist, writes a commented default file and returns
/// defaults.
pub fn load_default() -> Result<TesseraConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TesseraConfig::default())
        }
        Err(e) => Err(e),
    }
}
