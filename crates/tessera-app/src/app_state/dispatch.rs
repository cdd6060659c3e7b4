//! Action dispatch and the structural action surface.

use tessera_common::actions::{Action, GotoDirection, ResizeDirection, SplitDirection};
use tessera_common::events::Event;
use tessera_common::types::{PaneId, TabId};
use tessera_platform::terminal::ClipboardKind;
use tessera_tiling::TilingCommand;
use tracing::{debug, info};

use super::core::App;
use super::surface::SurfaceFactory;
use super::types::{CloseRequest, CloseTarget};

impl<F: SurfaceFactory> App<F> {
    /// Dispatch a resolved [`Action`]. Returns `true` if anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(action = action.label(), "dispatch");
        let changed = match action {
            Action::ClosePane => match self.window.focused_pane() {
                Some(pane) => self.close_pane(pane, true) != CloseRequest::NotFound,
                None => false,
            },
            Action::CloseTab => match self.window.active_tab_id() {
                Some(tab) => self.close_tab(tab, true) != CloseRequest::NotFound,
                None => false,
            },
            Action::Copy => {
                // The selection lives in the terminal core; hosts call
                // `copy_to_clipboard` with its text.
                debug!("copy has no selection source at this layer");
                false
            }
            Action::Paste => self.paste(ClipboardKind::Standard),
            Action::PasteSelection => self.paste(ClipboardKind::Selection),
            Action::None => false,
            other => match TilingCommand::from_action(&other) {
                Some(cmd) => self.window.execute(cmd),
                None => false,
            },
        };
        self.after_mutation();
        changed
    }

    // -- Splits --

    /// Split the focused pane; the new pane takes focus.
    pub fn split(&mut self, direction: SplitDirection) -> Option<PaneId> {
        let pane = self.window.split(direction);
        self.after_mutation();
        pane
    }

    pub fn toggle_zoom(&mut self) -> bool {
        let changed = self.window.toggle_zoom();
        self.after_mutation();
        changed
    }

    pub fn equalize_splits(&mut self) -> bool {
        let changed = self.window.equalize();
        self.after_mutation();
        changed
    }

    pub fn navigate(&mut self, direction: GotoDirection) -> bool {
        let changed = self.window.goto(direction);
        self.after_mutation();
        changed
    }

    pub fn resize_split(&mut self, direction: ResizeDirection, amount: u16) -> bool {
        let changed = self.window.resize(direction, amount);
        self.after_mutation();
        changed
    }

    /// Focus `pane` directly, e.g. after a click.
    pub fn focus_pane(&mut self, pane: PaneId) -> bool {
        let Some(tab) = self.window.tab_of(pane) else {
            return false;
        };
        if self.window.active_tab_id() != Some(tab) {
            self.window.select_tab(tab);
        }
        let changed = self.window.set_focus(pane);
        self.after_mutation();
        changed
    }

    // -- Tabs --

    pub fn new_tab(&mut self) -> (TabId, PaneId) {
        let opened = self.window.new_tab();
        self.after_mutation();
        opened
    }

    pub fn select_tab(&mut self, tab: TabId) -> bool {
        let changed = self.window.select_tab(tab);
        self.after_mutation();
        changed
    }

    /// Move the focused pane into a tab of its own.
    pub fn detach_to_new_tab(&mut self) -> Option<TabId> {
        let tab = self
            .window
            .focused_pane()
            .and_then(|pane| self.window.detach_pane(pane));
        self.after_mutation();
        tab
    }

    // -- Closing --

    /// Close `pane`. With `confirm_if_active`, a pane whose program is still
    /// running is not closed; a confirmation is requested instead.
    pub fn close_pane(&mut self, pane: PaneId, confirm_if_active: bool) -> CloseRequest {
        if self.window.pane(pane).is_none() {
            debug!(%pane, "close: no such pane");
            return CloseRequest::NotFound;
        }
        if confirm_if_active && self.needs_close_confirmation(&[pane]) {
            return self.request_close_confirmation(pane, CloseTarget::Pane(pane));
        }
        let request = match self.window.close_pane(pane) {
            Some(outcome) => CloseRequest::Closed(outcome),
            None => CloseRequest::NotFound,
        };
        self.after_mutation();
        request
    }

    /// Close a whole tab, asking first if any of its panes is busy.
    pub fn close_tab(&mut self, tab: TabId, confirm_if_active: bool) -> CloseRequest {
        let panes = self.window.panes_of(tab);
        if self.window.tab(tab).is_none() {
            return CloseRequest::NotFound;
        }
        if confirm_if_active && self.needs_close_confirmation(&panes) {
            let asker = panes
                .iter()
                .copied()
                .find(|p| self.surfaces.get(p).is_some_and(|s| s.needs_confirm_quit()));
            if let Some(asker) = asker {
                return self.request_close_confirmation(asker, CloseTarget::Tab(tab));
            }
        }
        let request = match self.window.close_tab(tab) {
            Some(outcome) => CloseRequest::Closed(outcome),
            None => CloseRequest::NotFound,
        };
        self.after_mutation();
        request
    }

    /// Resolve a close confirmation raised for `pane`.
    pub fn confirm_close(&mut self, pane: PaneId, accepted: bool) -> CloseRequest {
        let Some(target) = self.pending_close.remove(&pane) else {
            return CloseRequest::NotFound;
        };
        if !accepted {
            info!(%pane, ?target, "close cancelled");
            return CloseRequest::NotFound;
        }
        match target {
            CloseTarget::Pane(pane) => self.close_pane(pane, false),
            CloseTarget::Tab(tab) => self.close_tab(tab, false),
        }
    }

    fn needs_close_confirmation(&self, panes: &[PaneId]) -> bool {
        self.config.window.confirm_close_surface
            && panes
                .iter()
                .any(|p| self.surfaces.get(p).is_some_and(|s| s.needs_confirm_quit()))
    }

    fn request_close_confirmation(&mut self, pane: PaneId, target: CloseTarget) -> CloseRequest {
        info!(%pane, ?target, "close needs confirmation");
        self.pending_close.insert(pane, target);
        self.event_bus.publish(Event::CloseConfirmationRequested(pane));
        CloseRequest::NeedsConfirmation
    }
}
