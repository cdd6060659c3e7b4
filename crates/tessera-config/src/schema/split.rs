//! Split creation and resize limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    /// Share kept by the existing pane when it is split (valid range: 0.0-1.0, exclusive).
    pub default_ratio: f64,
    /// Smallest share either side of a divider may shrink to (valid range: 0.0-0.5, exclusive).
    pub min_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            default_ratio: 0.5,
            min_ratio: 0.1,
        }
    }
}
