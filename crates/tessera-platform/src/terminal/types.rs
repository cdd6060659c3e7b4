use serde::{Deserialize, Serialize};
use tessera_common::types::{ContentScale, CursorPos, Size};

use crate::keys::{Key, KeyAction, Modifiers};

/// The canonical key event delivered to the terminal core, exactly once per
/// physical key action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub action: KeyAction,
    /// What the key means under the active layout.
    pub key: Key,
    /// Where the key sits, named after a US layout.
    pub physical_key: Key,
    pub mods: Modifiers,
    /// Modifiers the layout used up to produce `utf8` (e.g. shift for "A").
    pub consumed_mods: Modifiers,
    /// Whether an IME composition was open when the key event began.
    pub composing: bool,
    /// Committed text produced by this key, if any.
    pub utf8: String,
    /// The character the key produces without modifiers.
    pub unshifted_codepoint: Option<char>,
}

impl KeyEvent {
    /// A press carrying only text, for IME commits that belong to no key.
    pub fn text(utf8: impl Into<String>) -> Self {
        Self {
            action: KeyAction::Press,
            utf8: utf8.into(),
            ..Self::default()
        }
    }
}

/// How the core handled a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEffect {
    Ignored,
    Consumed,
    /// The key closed the surface (e.g. a close binding).
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardKind {
    Standard,
    Selection,
    Primary,
}

/// Why the core asked for clipboard contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardRequest {
    /// A user-initiated paste.
    Paste,
    /// A program read the clipboard through OSC 52.
    Osc52Read(ClipboardKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButtonState {
    Press,
    Release,
}

/// Extra scroll information: precision devices (touchpads) report pixel
/// deltas rather than wheel detents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollMods {
    pub precision: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("terminal core callback failed: {0}")]
    Callback(String),

    #[error("surface is closed")]
    Closed,
}

/// Reasons the core refuses a clipboard completion until confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum PasteError {
    /// The text could break out of bracketed paste (e.g. contains newlines
    /// a shell would execute).
    #[error("paste contents are unsafe")]
    UnsafePaste,

    /// A program read the clipboard without permission.
    #[error("clipboard access was not authorized")]
    UnauthorizedPaste,

    #[error("out of memory completing clipboard request")]
    OutOfMemory,
}

impl PasteError {
    /// Whether the user can override this failure with a confirmation.
    pub fn needs_confirmation(self) -> bool {
        matches!(self, PasteError::UnsafePaste | PasteError::UnauthorizedPaste)
    }
}

/// The terminal core a surface drives. Implemented by the emulator; the
/// reconciler, clipboard bridge and surfaces only talk to it through this.
pub trait TerminalCore {
    fn key_callback(&mut self, event: KeyEvent) -> Result<KeyEffect, CoreError>;

    /// Returns whether the core consumed the click.
    fn mouse_button_callback(
        &mut self,
        state: MouseButtonState,
        button: MouseButton,
        mods: Modifiers,
    ) -> Result<bool, CoreError>;

    fn cursor_pos_callback(&mut self, pos: CursorPos, mods: Modifiers) -> Result<(), CoreError>;

    fn scroll_callback(&mut self, dx: f64, dy: f64, mods: ScrollMods) -> Result<(), CoreError>;

    /// Show `Some(text)` as the in-progress composition, or clear it.
    fn preedit_callback(&mut self, text: Option<&str>) -> Result<(), CoreError>;

    fn complete_clipboard_request(
        &mut self,
        request: ClipboardRequest,
        text: &str,
        confirmed: bool,
    ) -> Result<(), PasteError>;

    fn size_callback(&mut self, size: Size) -> Result<(), CoreError>;

    fn content_scale_callback(&mut self, scale: ContentScale) -> Result<(), CoreError>;

    /// Whether closing this surface would interrupt something (a running
    /// foreground process).
    fn needs_confirm_quit(&self) -> bool;
}
