//! Clipboard access for surfaces.

mod backend;
mod bridge;

pub use backend::{ClipboardBackend, MemoryClipboard, SystemClipboard};
pub use bridge::{
    ClipboardBridge, ConfirmOutcome, Confirmation, ConfirmationId, PendingRead, ReadOutcome,
    RequestId, WriteOutcome,
};
