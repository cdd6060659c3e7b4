pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::{Action, GotoDirection, ResizeDirection, SplitDirection};
pub use errors::{ConfigError, PlatformError, TesseraError};
pub use events::{Event, EventBus};
pub use types::{ContentScale, CursorPos, GridSize, PaneId, Rect, Size, SplitId, TabId};

pub type Result<T> = std::result::Result<T, TesseraError>;
