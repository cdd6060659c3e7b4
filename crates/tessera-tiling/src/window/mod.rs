//! The Window owns every tab's split tree, the per-tab focus pointer, zoom
//! state, and the chrome notifications those produce.

mod focus;
mod layout_compute;
mod operations;
mod types;

pub use types::*;
