use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Where a new split places the new pane relative to the focused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitDirection {
    Right,
    Down,
    Left,
    Up,
}

/// Target of a split navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GotoDirection {
    Previous,
    Next,
    Up,
    Down,
    Left,
    Right,
}

/// Direction a split divider moves when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    Up,
    Down,
    Left,
    Right,
}
