//! Configuration schema types for Tessera.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod clipboard;
mod layout;
mod split;
mod window;

pub use clipboard::*;
pub use layout::*;
pub use split::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TesseraConfig {
    pub split: SplitConfig,
    pub layout: LayoutConfig,
    pub clipboard: ClipboardConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: TesseraConfig = toml::from_str("").unwrap();
        assert_eq!(config, TesseraConfig::default());
    }

    #[test]
    fn sections_are_independent() {
        let config: TesseraConfig = toml::from_str(
            r#"
[layout]
gap = 2

[window]
default_title = "work"
"#,
        )
        .unwrap();
        assert_eq!(config.layout.gap, 2);
        assert_eq!(config.window.default_title, "work");
        assert!(config.window.confirm_close_surface);
        assert_eq!(config.split, SplitConfig::default());
    }
}
