//! A terminal surface: the core instance and composition state behind one
//! pane, and the host callbacks routed into it.

use tessera_common::types::{ContentScale, PaneId, Size};
use tessera_platform::ime::ImeSignal;
use tessera_platform::mouse::{button_from_host, scroll_delta, to_device_pixels};
use tessera_platform::terminal::MouseButtonState;
use tessera_platform::{
    InputMethod, InputReconciler, KeyDisposition, Modifiers, RawKeyEvent, TerminalCore,
};
use tracing::{debug, error};

/// Creates the per-pane collaborators whenever the window opens a pane.
pub trait SurfaceFactory {
    type Core: TerminalCore + 'static;
    type Ime: InputMethod + 'static;

    fn create(&mut self, pane: PaneId) -> (Self::Core, Self::Ime);
}

pub struct Surface<C, I> {
    pane: PaneId,
    core: C,
    im: I,
    reconciler: InputReconciler,
    has_input_focus: bool,
    scale_factor: f64,
    size: Size,
}

impl<C: TerminalCore, I: InputMethod> Surface<C, I> {
    pub fn new(pane: PaneId, core: C, im: I) -> Self {
        Self {
            pane,
            core,
            im,
            reconciler: InputReconciler::new(),
            has_input_focus: false,
            scale_factor: 1.0,
            size: Size::default(),
        }
    }

    pub fn pane(&self) -> PaneId {
        self.pane
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    pub fn input_method(&self) -> &I {
        &self.im
    }

    pub fn input_method_mut(&mut self) -> &mut I {
        &mut self.im
    }

    pub fn is_composing(&self) -> bool {
        self.reconciler.is_composing()
    }

    /// Whether this surface's widget holds keyboard focus.
    pub fn has_input_focus(&self) -> bool {
        self.has_input_focus
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn needs_confirm_quit(&self) -> bool {
        self.core.needs_confirm_quit()
    }

    // -- Keyboard --

    pub fn key_event(&mut self, raw: &RawKeyEvent) -> KeyDisposition {
        self.reconciler.key_event(raw, &mut self.im, &mut self.core)
    }

    /// An input method signal delivered outside any key event.
    pub fn ime_signal(&mut self, signal: ImeSignal) {
        self.reconciler.ime_signal(signal, &mut self.core);
    }

    pub(crate) fn focus_in(&mut self) {
        debug!(pane = %self.pane, "surface gained input focus");
        self.has_input_focus = true;
    }

    /// Losing focus abandons any open composition.
    pub(crate) fn focus_out(&mut self) {
        if !self.has_input_focus {
            return;
        }
        debug!(pane = %self.pane, "surface lost input focus");
        self.has_input_focus = false;
        self.reconciler.focus_out(&mut self.im, &mut self.core);
    }

    // -- Pointer --

    /// Forward a host button event. Returns whether the core consumed it.
    pub fn mouse_button(&mut self, pressed: bool, host_button: u32, state: u32) -> bool {
        let Some(button) = button_from_host(host_button) else {
            debug!(host_button, "unmapped mouse button");
            return false;
        };
        let action = if pressed {
            MouseButtonState::Press
        } else {
            MouseButtonState::Release
        };
        match self
            .core
            .mouse_button_callback(action, button, Modifiers::from_bits(state))
        {
            Ok(consumed) => consumed,
            Err(err) => {
                error!(%err, pane = %self.pane, "mouse button callback failed");
                false
            }
        }
    }

    /// Forward a pointer position in logical units.
    pub fn cursor_pos(&mut self, x: f64, y: f64, state: u32) {
        let pos = to_device_pixels(x, y, self.scale_factor);
        if let Err(err) = self
            .core
            .cursor_pos_callback(pos, Modifiers::from_bits(state))
        {
            error!(%err, pane = %self.pane, "cursor position callback failed");
        }
    }

    pub fn scroll(&mut self, dx: f64, dy: f64, precision: bool) {
        let (dx, dy, mods) = scroll_delta(dx, dy, precision, self.scale_factor);
        if let Err(err) = self.core.scroll_callback(dx, dy, mods) {
            error!(%err, pane = %self.pane, "scroll callback failed");
        }
    }

    // -- Geometry --

    /// Tell the core its new pixel size. Unchanged sizes are not forwarded.
    pub fn set_size(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        if let Err(err) = self.core.size_callback(size) {
            error!(%err, pane = %self.pane, "size callback failed");
        }
        true
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor <= 0.0 {
            debug!(scale_factor, "ignoring non-positive scale factor");
            return;
        }
        self.scale_factor = scale_factor;
        let scale = ContentScale::uniform(scale_factor as f32);
        if let Err(err) = self.core.content_scale_callback(scale) {
            error!(%err, pane = %self.pane, "content scale callback failed");
        }
    }
}
