//! Clipboard policy: user pastes, program (OSC 52) reads and writes, and
//! routing of confirmations to the user or the configured policy.

use tessera_common::events::Event;
use tessera_common::types::PaneId;
use tessera_config::ClipboardAccess;
use tessera_platform::clipboard::{
    ConfirmOutcome, Confirmation, ConfirmationId, ReadOutcome, RequestId, WriteOutcome,
};
use tessera_platform::terminal::{ClipboardKind, ClipboardRequest, PasteError};
use tessera_platform::TerminalCore;
use tracing::{debug, info, warn};

use super::core::App;
use super::surface::SurfaceFactory;

impl<F: SurfaceFactory> App<F> {
    /// Paste `kind` into the focused pane.
    pub fn paste(&mut self, kind: ClipboardKind) -> bool {
        let Some(pane) = self.window.focused_pane() else {
            return false;
        };
        let id = self.clipboard.request(pane, kind, ClipboardRequest::Paste);
        matches!(
            self.complete_clipboard_read(id),
            ReadOutcome::Delivered | ReadOutcome::NeedsConfirmation(_)
        )
    }

    /// A program in `pane` asked to read the clipboard. Returns the request
    /// to complete later, or `None` when reads are denied.
    pub fn clipboard_read_requested(
        &mut self,
        pane: PaneId,
        kind: ClipboardKind,
    ) -> Option<RequestId> {
        if !self.surfaces.contains_key(&pane) {
            return None;
        }
        if self.config.clipboard.read == ClipboardAccess::Deny {
            info!(%pane, ?kind, "clipboard read denied by policy");
            return None;
        }
        Some(
            self.clipboard
                .request(pane, kind, ClipboardRequest::Osc52Read(kind)),
        )
    }

    /// Fetch the contents for an outstanding read from the backend and
    /// deliver them.
    pub fn complete_clipboard_read(&mut self, id: RequestId) -> ReadOutcome {
        let Some(kind) = self.clipboard.pending(id).map(|read| read.kind) else {
            debug!(?id, "no pending clipboard read");
            return ReadOutcome::Discarded;
        };
        match self.clipboard_backend.get(kind) {
            Ok(text) => self.deliver_clipboard(id, &text),
            Err(err) => {
                warn!(%err, ?kind, "clipboard read failed");
                // Completing without a core drops the request.
                self.clipboard.complete(id, "", None)
            }
        }
    }

    /// Deliver text for an outstanding read, for hosts whose clipboard
    /// answers asynchronously.
    pub fn deliver_clipboard(&mut self, id: RequestId, text: &str) -> ReadOutcome {
        let pane = self.clipboard.pending(id).map(|read| read.pane);
        let core = pane
            .and_then(|p| self.surfaces.get_mut(&p))
            .map(|s| s.core_mut() as &mut dyn TerminalCore);
        let outcome = self.clipboard.complete(id, text, core);
        if let ReadOutcome::NeedsConfirmation(confirmation) = outcome {
            self.route_confirmation(confirmation);
        }
        outcome
    }

    /// A program in `pane` asked to write the clipboard.
    pub fn clipboard_write_requested(
        &mut self,
        pane: PaneId,
        kind: ClipboardKind,
        text: &str,
    ) -> Option<WriteOutcome> {
        if !self.surfaces.contains_key(&pane) {
            return None;
        }
        let requires_confirmation = match self.config.clipboard.write {
            ClipboardAccess::Allow => false,
            ClipboardAccess::Ask => true,
            ClipboardAccess::Deny => {
                info!(%pane, ?kind, "clipboard write denied by policy");
                return None;
            }
        };
        let outcome = self.clipboard.set(
            pane,
            self.clipboard_backend.as_mut(),
            kind,
            text,
            requires_confirmation,
        );
        if let WriteOutcome::NeedsConfirmation(confirmation) = outcome {
            self.route_confirmation(confirmation);
        }
        Some(outcome)
    }

    /// A user-initiated copy from `pane`. Never needs confirmation.
    pub fn copy_to_clipboard(
        &mut self,
        pane: PaneId,
        kind: ClipboardKind,
        text: &str,
    ) -> WriteOutcome {
        self.clipboard
            .set(pane, self.clipboard_backend.as_mut(), kind, text, false)
    }

    /// The user answered a clipboard confirmation.
    pub fn confirm_clipboard(&mut self, id: ConfirmationId, accepted: bool) -> ConfirmOutcome {
        let pane = self.clipboard.confirmation(id).map(Confirmation::pane);
        let core = pane
            .and_then(|p| self.surfaces.get_mut(&p))
            .map(|s| s.core_mut() as &mut dyn TerminalCore);
        self.clipboard
            .confirm(id, accepted, core, self.clipboard_backend.as_mut())
    }

    /// Settle a confirmation the configured policy already answers, or ask
    /// the user.
    fn route_confirmation(&mut self, id: ConfirmationId) {
        let Some(confirmation) = self.clipboard.confirmation(id) else {
            return;
        };
        let pane = confirmation.pane();
        let policy_accepts = match confirmation {
            Confirmation::Read {
                reason: PasteError::UnsafePaste,
                ..
            } => !self.config.clipboard.paste_protection,
            Confirmation::Read {
                reason: PasteError::UnauthorizedPaste,
                ..
            } => self.config.clipboard.read == ClipboardAccess::Allow,
            _ => false,
        };

        if policy_accepts {
            debug!(?id, %pane, "clipboard confirmation accepted by policy");
            self.confirm_clipboard(id, true);
        } else {
            self.event_bus.publish(Event::ClipboardConfirmationRequested {
                pane,
                confirmation: id.0,
            });
        }
    }
}
