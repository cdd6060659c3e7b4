//! Result types for the app's action surface.

use tessera_common::types::{PaneId, TabId};
use tessera_tiling::CloseOutcome;

/// What a close confirmation will close once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTarget {
    Pane(PaneId),
    Tab(TabId),
}

/// Result of asking to close a pane or tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseRequest {
    Closed(CloseOutcome),
    /// A program is still running; the user was asked first.
    NeedsConfirmation,
    NotFound,
}

impl CloseRequest {
    pub fn is_closed(&self) -> bool {
        matches!(self, CloseRequest::Closed(_))
    }
}
