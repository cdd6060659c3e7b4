//! The boundary to the terminal core: canonical events, callback trait and
//! error types.

mod recording;
mod types;

pub use recording::{CoreCall, RecordingCore};
pub use types::*;
