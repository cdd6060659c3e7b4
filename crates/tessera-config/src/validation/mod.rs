//! Configuration validation.
//!
//! Each section is checked independently and every error is collected into
//! a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::TesseraConfig;
use tessera_common::ConfigError;

use helpers::{validate_open_range, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TesseraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_split(&mut errors, config);
    validate_layout(&mut errors, config);
    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_split(errors: &mut Vec<String>, config: &TesseraConfig) {
    let split = &config.split;
    validate_open_range(errors, "split.default_ratio", split.default_ratio, 0.0, 1.0);
    validate_open_range(errors, "split.min_ratio", split.min_ratio, 0.0, 0.5);

    // A fresh split must not start out below the resize floor.
    if split.min_ratio > 0.0
        && split.min_ratio < 0.5
        && (split.default_ratio < split.min_ratio || split.default_ratio > 1.0 - split.min_ratio)
    {
        errors.push(format!(
            "split.default_ratio = {} leaves a side smaller than split.min_ratio = {}",
            split.default_ratio, split.min_ratio
        ));
    }
}

fn validate_layout(errors: &mut Vec<String>, config: &TesseraConfig) {
    validate_range(errors, "layout.gap", config.layout.gap, 0, 64);
    validate_range(
        errors,
        "layout.outer_padding",
        config.layout.outer_padding,
        0,
        128,
    );
}

fn validate_window(errors: &mut Vec<String>, config: &TesseraConfig) {
    if config.window.default_title.trim().is_empty() {
        errors.push("window.default_title must not be empty".into());
    }
}
