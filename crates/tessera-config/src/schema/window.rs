//! Window behavior settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    /// Ask before closing a pane whose program is still running.
    pub confirm_close_surface: bool,
    /// Title used when the focused pane has not set one.
    pub default_title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            confirm_close_surface: true,
            default_title: "tessera".into(),
        }
    }
}
