//! Host input routed to surfaces, and pane-reported titles.

use tessera_common::types::PaneId;
use tessera_platform::ime::ImeSignal;
use tessera_platform::{KeyDisposition, KeyEffect, RawKeyEvent};
use tracing::debug;

use super::core::App;
use super::surface::SurfaceFactory;

impl<F: SurfaceFactory> App<F> {
    /// Route a raw key event to `pane`. A key the core reports as closing
    /// its surface closes the pane.
    pub fn key_event(&mut self, pane: PaneId, raw: &RawKeyEvent) -> Option<KeyDisposition> {
        let Some(surface) = self.surfaces.get_mut(&pane) else {
            debug!(%pane, "key event for unknown surface");
            return None;
        };
        let disposition = surface.key_event(raw);
        if disposition == KeyDisposition::Dispatched(KeyEffect::Closed) {
            self.close_pane(pane, false);
        }
        Some(disposition)
    }

    /// Route a raw key event to the surface holding keyboard focus.
    pub fn focused_key_event(&mut self, raw: &RawKeyEvent) -> Option<KeyDisposition> {
        let pane = self.input_focus?;
        self.key_event(pane, raw)
    }

    /// An input method signal outside any key event (on-screen keyboards).
    pub fn ime_signal(&mut self, pane: PaneId, signal: ImeSignal) -> bool {
        match self.surfaces.get_mut(&pane) {
            Some(surface) => {
                surface.ime_signal(signal);
                true
            }
            None => false,
        }
    }

    /// The terminal in `pane` set its title.
    pub fn pane_title_changed(&mut self, pane: PaneId, title: &str) {
        let focused = self.has_input_focus(pane);
        self.window.pane_title_changed(pane, title, focused);
        self.sync();
    }

    /// The terminal in `pane` reported a new working directory.
    pub fn pane_pwd_changed(&mut self, pane: PaneId, pwd: &str) {
        let focused = self.has_input_focus(pane);
        self.window.pane_pwd_changed(pane, pwd, focused);
        self.sync();
    }

    fn has_input_focus(&self, pane: PaneId) -> bool {
        self.surfaces
            .get(&pane)
            .is_some_and(|surface| surface.has_input_focus())
    }
}
