use serde::{Deserialize, Serialize};

use crate::keys::KeyAction;

/// A key event as the host window system reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawKeyEvent {
    pub action: KeyAction,
    /// Native XKB keycode.
    pub keycode: u32,
    /// X11 keysym after the layout and modifiers were applied.
    pub keyval: u32,
    /// What the key produces with no modifiers, if printable.
    #[serde(default)]
    pub unshifted_codepoint: Option<char>,
    /// GDK-style modifier bitmask.
    #[serde(default)]
    pub state: u32,
    /// Modifiers consumed by the layout to produce `keyval`.
    #[serde(default)]
    pub consumed: u32,
}

/// Signals an input method emits. Backends emit them in different orders
/// within one key event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", content = "text", rename_all = "snake_case")]
pub enum ImeSignal {
    PreeditStart,
    PreeditChanged(String),
    PreeditEnd,
    Commit(String),
}

/// The result of offering a raw key event to the input method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImeFilter {
    /// The input method claims the event.
    pub handled: bool,
    /// Signals emitted while filtering, in order.
    #[serde(default)]
    pub signals: Vec<ImeSignal>,
}

impl ImeFilter {
    pub fn unhandled() -> Self {
        Self::default()
    }

    pub fn handled(signals: Vec<ImeSignal>) -> Self {
        Self {
            handled: true,
            signals,
        }
    }
}

/// The host's input method context for one surface.
pub trait InputMethod {
    fn filter(&mut self, event: &RawKeyEvent) -> ImeFilter;

    /// Abandon any composition in progress.
    fn reset(&mut self);
}

/// Whether a key event is being processed, and whether it began while a
/// composition was open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyEventState {
    #[default]
    None,
    Composing,
    NotComposing,
}

/// Outcome of the decision table for one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The input method is still composing; the key belongs to it.
    Consumed,
    /// The input method handled the key and nothing should reach the core.
    Suppressed,
    Dispatch,
}
