use tessera_common::actions::{Action, GotoDirection, ResizeDirection, SplitDirection};

/// Structural commands the window model executes directly.
///
/// Closing is not here: the host decides whether a close needs confirmation
/// before calling `Window::close_pane` / `Window::close_tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingCommand {
    Split(SplitDirection),
    Goto(GotoDirection),
    Resize(ResizeDirection, u16),
    ToggleZoom,
    Equalize,
    NewTab,
    NextTab,
    PreviousTab,
    GotoTab(usize),
    Detach,
}

impl TilingCommand {
    /// The tiling command an action maps to, if it is purely structural.
    pub fn from_action(action: &Action) -> Option<Self> {
        Some(match *action {
            Action::NewSplit(direction) => Self::Split(direction),
            Action::GotoSplit(direction) => Self::Goto(direction),
            Action::ResizeSplit { direction, amount } => Self::Resize(direction, amount),
            Action::ToggleSplitZoom => Self::ToggleZoom,
            Action::EqualizeSplits => Self::Equalize,
            Action::NewTab => Self::NewTab,
            Action::NextTab => Self::NextTab,
            Action::PreviousTab => Self::PreviousTab,
            Action::GotoTab(index) => Self::GotoTab(index),
            Action::DetachPane => Self::Detach,
            Action::ClosePane
            | Action::CloseTab
            | Action::Copy
            | Action::Paste
            | Action::PasteSelection
            | Action::None => return None,
        })
    }
}
