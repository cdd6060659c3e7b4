//! A terminal core that records every callback. Used by tests and by the
//! scripted replay driver in place of a real emulator.

use serde::Serialize;
use tessera_common::types::{ContentScale, CursorPos, Size};

use super::types::{
    ClipboardRequest, CoreError, KeyEffect, KeyEvent, MouseButton, MouseButtonState, PasteError,
    ScrollMods, TerminalCore,
};
use crate::keys::Modifiers;

/// One recorded callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum CoreCall {
    Key(KeyEvent),
    MouseButton {
        state: MouseButtonState,
        button: MouseButton,
        mods: Modifiers,
    },
    CursorPos {
        x: f32,
        y: f32,
    },
    Scroll {
        dx: f64,
        dy: f64,
        precision: bool,
    },
    Preedit(Option<String>),
    Clipboard {
        request: ClipboardRequest,
        text: String,
        confirmed: bool,
    },
    Size(Size),
    ContentScale(ContentScale),
}

#[derive(Debug, Default)]
pub struct RecordingCore {
    pub calls: Vec<CoreCall>,
    /// Effect returned from every key callback.
    pub key_effect: Option<KeyEffect>,
    /// Make key callbacks fail.
    pub fail_keys: bool,
    /// Returned for unconfirmed clipboard completions. Confirmed completions
    /// always succeed unless this is `OutOfMemory`.
    pub paste_guard: Option<PasteError>,
    pub confirm_quit: bool,
    /// Text that actually reached the terminal through clipboard completions.
    pub pasted: Vec<String>,
}

impl RecordingCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<&KeyEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CoreCall::Key(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn preedits(&self) -> Vec<Option<&str>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CoreCall::Preedit(text) => Some(text.as_deref()),
                _ => None,
            })
            .collect()
    }
}

impl TerminalCore for RecordingCore {
    fn key_callback(&mut self, event: KeyEvent) -> Result<KeyEffect, CoreError> {
        self.calls.push(CoreCall::Key(event));
        if self.fail_keys {
            return Err(CoreError::Callback("key encoding failed".into()));
        }
        Ok(self.key_effect.unwrap_or(KeyEffect::Consumed))
    }

    fn mouse_button_callback(
        &mut self,
        state: MouseButtonState,
        button: MouseButton,
        mods: Modifiers,
    ) -> Result<bool, CoreError> {
        self.calls.push(CoreCall::MouseButton {
            state,
            button,
            mods,
        });
        Ok(true)
    }

    fn cursor_pos_callback(&mut self, pos: CursorPos, _mods: Modifiers) -> Result<(), CoreError> {
        self.calls.push(CoreCall::CursorPos { x: pos.x, y: pos.y });
        Ok(())
    }

    fn scroll_callback(&mut self, dx: f64, dy: f64, mods: ScrollMods) -> Result<(), CoreError> {
        self.calls.push(CoreCall::Scroll {
            dx,
            dy,
            precision: mods.precision,
        });
        Ok(())
    }

    fn preedit_callback(&mut self, text: Option<&str>) -> Result<(), CoreError> {
        self.calls.push(CoreCall::Preedit(text.map(str::to_string)));
        Ok(())
    }

    fn complete_clipboard_request(
        &mut self,
        request: ClipboardRequest,
        text: &str,
        confirmed: bool,
    ) -> Result<(), PasteError> {
        self.calls.push(CoreCall::Clipboard {
            request,
            text: text.to_string(),
            confirmed,
        });
        match self.paste_guard {
            Some(PasteError::OutOfMemory) => return Err(PasteError::OutOfMemory),
            Some(err) if !confirmed => return Err(err),
            _ => {}
        }
        self.pasted.push(text.to_string());
        Ok(())
    }

    fn size_callback(&mut self, size: Size) -> Result<(), CoreError> {
        self.calls.push(CoreCall::Size(size));
        Ok(())
    }

    fn content_scale_callback(&mut self, scale: ContentScale) -> Result<(), CoreError> {
        self.calls.push(CoreCall::ContentScale(scale));
        Ok(())
    }

    fn needs_confirm_quit(&self) -> bool {
        self.confirm_quit
    }
}
