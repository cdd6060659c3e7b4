//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{ClipboardAccess, TesseraConfig};
use std::path::Path;
use tessera_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[split]
default_ratio = 0.6

[clipboard]
read = "deny"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.split.default_ratio - 0.6).abs() < f64::EPSILON);
    assert_eq!(config.clipboard.read, ClipboardAccess::Deny);
    // Defaults preserved
    assert!((config.split.min_ratio - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.clipboard.write, ClipboardAccess::Allow);
    assert_eq!(config.window.default_title, "tessera");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[split]\nmin_ratio = 0.7\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, TesseraConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    let config = parse_config(default_config_toml()).unwrap();
    assert_eq!(config, TesseraConfig::default());
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\ngap = 3\n").unwrap();

    let result = create_default_config(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
    assert_eq!(load_from_path(&path).unwrap().layout.gap, 3);
}

#[test]
fn config_path_nests_under_app_directory() {
    let path = config_path_in(Path::new("/home/user/.config"));
    assert_eq!(path, Path::new("/home/user/.config/tessera/config.toml"));
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config directory.
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with(Path::new("tessera").join("config.toml")));
    }
}
