use super::Action;

impl Action {
    /// Human-readable label, used in logs and the replay transcript.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewSplit(_) => "New Split",
            Action::ClosePane => "Close Pane",
            Action::ToggleSplitZoom => "Toggle Split Zoom",
            Action::EqualizeSplits => "Equalize Splits",
            Action::GotoSplit(_) => "Go To Split",
            Action::ResizeSplit { .. } => "Resize Split",
            Action::NewTab => "New Tab",
            Action::CloseTab => "Close Tab",
            Action::NextTab => "Next Tab",
            Action::PreviousTab => "Previous Tab",
            Action::GotoTab(_) => "Go To Tab",
            Action::DetachPane => "Move Pane To New Tab",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
            Action::PasteSelection => "Paste Selection",
            Action::None => "None",
        }
    }

    /// Whether the action restructures the pane tree.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Action::NewSplit(_)
                | Action::ClosePane
                | Action::ToggleSplitZoom
                | Action::EqualizeSplits
                | Action::ResizeSplit { .. }
                | Action::NewTab
                | Action::CloseTab
                | Action::DetachPane
        )
    }
}
