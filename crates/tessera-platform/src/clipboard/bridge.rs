//! Request/response correlation for clipboard reads, and the confirmation
//! gate for reads and writes the terminal core will not accept blindly.

use std::collections::HashMap;

use serde::Serialize;
use tessera_common::types::PaneId;
use tracing::{debug, info, warn};

use super::ClipboardBackend;
use crate::terminal::{ClipboardKind, ClipboardRequest, PasteError, TerminalCore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConfirmationId(pub u64);

/// An outstanding asynchronous read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRead {
    pub pane: PaneId,
    pub kind: ClipboardKind,
    pub request: ClipboardRequest,
}

/// Something waiting on the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The core refused this text until the user approves it.
    Read {
        pane: PaneId,
        request: ClipboardRequest,
        text: String,
        reason: PasteError,
    },
    /// A program wants to write the clipboard.
    Write {
        pane: PaneId,
        kind: ClipboardKind,
        text: String,
    },
}

impl Confirmation {
    pub fn pane(&self) -> PaneId {
        match self {
            Confirmation::Read { pane, .. } | Confirmation::Write { pane, .. } => *pane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Delivered,
    NeedsConfirmation(ConfirmationId),
    /// The core could not take the text at all.
    Aborted,
    /// Unknown request, or its pane is gone.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    NeedsConfirmation(ConfirmationId),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Delivered,
    Written,
    Rejected,
    /// Delivery or write failed after confirmation.
    Failed,
    Unknown,
}

#[derive(Debug, Default)]
pub struct ClipboardBridge {
    next_id: u64,
    reads: HashMap<RequestId, PendingRead>,
    confirmations: HashMap<ConfirmationId, Confirmation>,
}

impl ClipboardBridge {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Record an outstanding read for `pane`.
    pub fn request(
        &mut self,
        pane: PaneId,
        kind: ClipboardKind,
        request: ClipboardRequest,
    ) -> RequestId {
        let id = RequestId(self.alloc());
        self.reads.insert(
            id,
            PendingRead {
                pane,
                kind,
                request,
            },
        );
        debug!(?id, %pane, ?kind, ?request, "clipboard read requested");
        id
    }

    pub fn pending(&self, id: RequestId) -> Option<&PendingRead> {
        self.reads.get(&id)
    }

    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }

    pub fn confirmation(&self, id: ConfirmationId) -> Option<&Confirmation> {
        self.confirmations.get(&id)
    }

    pub fn pending_confirmations(&self) -> usize {
        self.confirmations.len()
    }

    /// Deliver the contents for a read. `core` is `None` when the pane that
    /// asked has closed in the meantime.
    pub fn complete(
        &mut self,
        id: RequestId,
        text: &str,
        core: Option<&mut dyn TerminalCore>,
    ) -> ReadOutcome {
        let Some(read) = self.reads.remove(&id) else {
            debug!(?id, "completion for unknown clipboard request");
            return ReadOutcome::Discarded;
        };
        let Some(core) = core else {
            debug!(?id, pane = %read.pane, "pane closed before clipboard read completed");
            return ReadOutcome::Discarded;
        };

        match core.complete_clipboard_request(read.request, text, false) {
            Ok(()) => ReadOutcome::Delivered,
            Err(reason) if reason.needs_confirmation() => {
                let confirmation = ConfirmationId(self.alloc());
                self.confirmations.insert(
                    confirmation,
                    Confirmation::Read {
                        pane: read.pane,
                        request: read.request,
                        text: text.to_string(),
                        reason,
                    },
                );
                info!(?confirmation, pane = %read.pane, %reason, "clipboard read needs confirmation");
                ReadOutcome::NeedsConfirmation(confirmation)
            }
            Err(reason) => {
                warn!(?id, pane = %read.pane, %reason, "clipboard read aborted");
                ReadOutcome::Aborted
            }
        }
    }

    /// Write `text` now, or hold it for confirmation.
    pub fn set(
        &mut self,
        pane: PaneId,
        backend: &mut dyn ClipboardBackend,
        kind: ClipboardKind,
        text: &str,
        requires_confirmation: bool,
    ) -> WriteOutcome {
        if requires_confirmation {
            let confirmation = ConfirmationId(self.alloc());
            self.confirmations.insert(
                confirmation,
                Confirmation::Write {
                    pane,
                    kind,
                    text: text.to_string(),
                },
            );
            info!(?confirmation, %pane, ?kind, "clipboard write needs confirmation");
            return WriteOutcome::NeedsConfirmation(confirmation);
        }
        match backend.set(kind, text) {
            Ok(()) => WriteOutcome::Written,
            Err(err) => {
                warn!(%err, ?kind, "clipboard write failed");
                WriteOutcome::Failed
            }
        }
    }

    /// Resolve a confirmation. Accepted reads are re-delivered as confirmed;
    /// accepted writes are performed.
    pub fn confirm(
        &mut self,
        id: ConfirmationId,
        accepted: bool,
        core: Option<&mut dyn TerminalCore>,
        backend: &mut dyn ClipboardBackend,
    ) -> ConfirmOutcome {
        let Some(confirmation) = self.confirmations.remove(&id) else {
            return ConfirmOutcome::Unknown;
        };
        if !accepted {
            info!(?id, pane = %confirmation.pane(), "clipboard confirmation rejected");
            return ConfirmOutcome::Rejected;
        }

        match confirmation {
            Confirmation::Read {
                pane,
                request,
                text,
                ..
            } => {
                let Some(core) = core else {
                    debug!(?id, %pane, "pane closed before confirmation");
                    return ConfirmOutcome::Failed;
                };
                match core.complete_clipboard_request(request, &text, true) {
                    Ok(()) => ConfirmOutcome::Delivered,
                    Err(reason) => {
                        warn!(?id, %pane, %reason, "confirmed clipboard read failed");
                        ConfirmOutcome::Failed
                    }
                }
            }
            Confirmation::Write { kind, text, .. } => match backend.set(kind, &text) {
                Ok(()) => ConfirmOutcome::Written,
                Err(err) => {
                    warn!(%err, ?kind, "confirmed clipboard write failed");
                    ConfirmOutcome::Failed
                }
            },
        }
    }

    /// Drop everything belonging to a closed pane.
    pub fn forget_pane(&mut self, pane: PaneId) {
        self.reads.retain(|_, read| read.pane != pane);
        self.confirmations.retain(|_, c| c.pane() != pane);
    }
}
