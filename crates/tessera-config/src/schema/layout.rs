//! Pane spacing configuration.

use serde::{Deserialize, Serialize};

/// Pane layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between panes in pixels (valid range: 0-64).
    pub gap: u32,
    /// Padding around the whole tiling area in pixels (valid range: 0-128).
    pub outer_padding: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.gap, 0);
        assert_eq!(config.outer_padding, 0);
    }

    #[test]
    fn layout_config_from_toml() {
        let config: LayoutConfig = toml::from_str("gap = 4\nouter_padding = 12").unwrap();
        assert_eq!(config.gap, 4);
        assert_eq!(config.outer_padding, 12);
    }
}
