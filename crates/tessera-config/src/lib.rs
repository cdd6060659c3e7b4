//! Tessera configuration.
//!
//! TOML-based configuration with validation. Every section uses defaults so
//! partial configs work out of the box.
//!
//! ```rust,no_run
//! use tessera_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.window.default_title);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ClipboardAccess, ClipboardConfig, LayoutConfig, SplitConfig, TesseraConfig, WindowConfig,
};
pub use toml_loader::{default_config_path, load_from_path};

use std::path::Path;
use tessera_common::ConfigError;

/// Load config from the platform default path, creating a commented
/// default file when none exists.
pub fn load_config() -> Result<TesseraConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from `path` when given, otherwise from the default location.
pub fn load_config_from(path: Option<&Path>) -> Result<TesseraConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_config(),
    }
}

/// Serialize a config back to TOML.
pub fn config_to_toml(config: &TesseraConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))
}
