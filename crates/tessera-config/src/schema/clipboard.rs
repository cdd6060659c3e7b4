//! Clipboard access policy for programs running in panes.

use serde::{Deserialize, Serialize};

/// What happens when a program asks to read or write the clipboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardAccess {
    #[default]
    Allow,
    Ask,
    Deny,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Program-initiated (OSC 52) reads.
    pub read: ClipboardAccess,
    /// Program-initiated (OSC 52) writes.
    pub write: ClipboardAccess,
    /// Ask before pasting text the terminal core considers unsafe.
    pub paste_protection: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            read: ClipboardAccess::Ask,
            write: ClipboardAccess::Allow,
            paste_protection: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_config_defaults() {
        let config = ClipboardConfig::default();
        assert_eq!(config.read, ClipboardAccess::Ask);
        assert_eq!(config.write, ClipboardAccess::Allow);
        assert!(config.paste_protection);
    }

    #[test]
    fn clipboard_access_lowercase() {
        let config: ClipboardConfig =
            toml::from_str("read = \"deny\"\nwrite = \"ask\"").unwrap();
        assert_eq!(config.read, ClipboardAccess::Deny);
        assert_eq!(config.write, ClipboardAccess::Ask);
        assert!(config.paste_protection);
    }

    #[test]
    fn unknown_access_is_rejected() {
        let result: Result<ClipboardConfig, _> = toml::from_str("read = \"sometimes\"");
        assert!(result.is_err());
    }
}
