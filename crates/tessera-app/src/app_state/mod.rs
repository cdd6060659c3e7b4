//! Top-level application state.
//!
//! Ties the window model to one terminal surface per pane, routes host input
//! and structural actions, applies clipboard policy, and publishes chrome
//! events on the bus.

mod clipboard;
mod core;
mod dispatch;
mod input;
mod surface;
mod types;


pub use self::core::{window_settings, App};
pub use surface::{Surface, SurfaceFactory};
pub use types::{CloseRequest, CloseTarget};
