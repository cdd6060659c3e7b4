//! Split-tree tiling: the pane arena, layout, and the per-window tab model.

pub mod commands;
pub mod layout;
pub mod pane;
pub mod tree;
pub mod window;

pub use commands::TilingCommand;
pub use layout::{LayoutEngine, SplitBorder};
pub use pane::{Pane, PaneGeometry, ZoomSave};
pub use tree::{Container, Elem, Orientation, Side, SplitTree, TreeError, TreeSnapshot};
pub use window::{CloseOutcome, Tab, Window, WindowSettings};
