//! Tests for the validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&TesseraConfig::default()).is_ok());
}

#[test]
fn catches_default_ratio_at_bounds() {
    let mut config = TesseraConfig::default();
    config.split.default_ratio = 1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.default_ratio"));

    config.split.default_ratio = 0.0;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_nan_ratio() {
    let mut config = TesseraConfig::default();
    config.split.min_ratio = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.min_ratio"));
}

#[test]
fn catches_min_ratio_of_half() {
    let mut config = TesseraConfig::default();
    config.split.min_ratio = 0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.min_ratio"));
}

#[test]
fn catches_default_ratio_below_floor() {
    let mut config = TesseraConfig::default();
    config.split.min_ratio = 0.3;
    config.split.default_ratio = 0.8;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("smaller than split.min_ratio"));

    config.split.default_ratio = 0.7;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_layout_out_of_range() {
    let mut config = TesseraConfig::default();
    config.layout.gap = 100;
    config.layout.outer_padding = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gap"));
    assert!(err.contains("layout.outer_padding"));
}

#[test]
fn catches_blank_default_title() {
    let mut config = TesseraConfig::default();
    config.window.default_title = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.default_title"));
}

#[test]
fn collects_every_error() {
    let mut config = TesseraConfig::default();
    config.split.default_ratio = 2.0;
    config.layout.gap = 65;
    config.window.default_title = String::new();
    match validate(&config) {
        Err(ConfigError::ValidationError(msg)) => assert_eq!(msg.split("; ").count(), 4),
        other => panic!("expected validation error, got {other:?}"),
    }
}
