//! Tessera application layer: the app state tying the window model to
//! terminal surfaces, and the scripted replay driver.

pub mod app_state;
pub mod replay;

pub use app_state::{App, CloseRequest, CloseTarget, Surface, SurfaceFactory};
pub use replay::{Replay, Report, Script};
