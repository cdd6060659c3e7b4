use serde::{Deserialize, Serialize};

use super::{GotoDirection, ResizeDirection, SplitDirection};

/// Every user-triggerable action on the pane tree.
///
/// Keybinds, menus and scripted replays all resolve to an `Action`.
/// The app dispatcher matches on this enum to route to the window model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Splits --
    NewSplit(SplitDirection),
    ClosePane,
    ToggleSplitZoom,
    EqualizeSplits,
    GotoSplit(GotoDirection),
    ResizeSplit {
        direction: ResizeDirection,
        amount: u16,
    },

    // -- Tabs --
    NewTab,
    CloseTab,
    NextTab,
    PreviousTab,
    GotoTab(usize),
    DetachPane,

    // -- Clipboard --
    Copy,
    Paste,
    PasteSelection,

    // -- Noop --
    None,
}
