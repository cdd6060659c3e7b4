//! Where tessera keeps its config file, and writing the commented default.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tessera_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "tessera";
const FILE_NAME: &str = "config.toml";

/// `<base>/tessera/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// The config file under the platform config directory
/// (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is left untouched and reported as an error.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create directory", dir, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| io_error("create", path, e))?;
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {err}", path.display()))
}
