//! Merges raw key events and input method signals into exactly one canonical
//! key event per physical key action.

use tracing::{debug, error, warn};

use super::types::{Decision, ImeSignal, InputMethod, KeyEventState, RawKeyEvent};
use crate::terminal::{KeyEffect, KeyEvent, TerminalCore};
use crate::keys::{keycode_to_key, keyval_to_key, Key, Modifiers};

/// Bound on text committed during a single key event.
pub const COMMIT_CAPACITY: usize = 128;

/// What happened to a raw key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Swallowed by an open composition.
    Composing,
    /// The input method handled it; nothing was dispatched.
    Suppressed,
    Dispatched(KeyEffect),
    /// The core failed to process the event.
    Failed,
}

impl KeyDisposition {
    /// Whether the host should consider the event handled.
    pub fn handled(self) -> bool {
        match self {
            KeyDisposition::Composing | KeyDisposition::Suppressed => true,
            KeyDisposition::Dispatched(effect) => effect != KeyEffect::Ignored,
            KeyDisposition::Failed => false,
        }
    }
}

/// The decision table. First match wins.
pub fn decide(
    im_handled: bool,
    prior_composing: bool,
    composing_now: bool,
    commit_len: usize,
) -> Decision {
    if im_handled && composing_now {
        Decision::Consumed
    } else if im_handled && prior_composing {
        // This key finished the composition (e.g. Enter); its commit was
        // already delivered on its own.
        Decision::Suppressed
    } else if im_handled && commit_len == 0 {
        Decision::Suppressed
    } else {
        Decision::Dispatch
    }
}

/// Resolve the logical key for a dispatched event.
///
/// Precedence: keysym table, first byte of committed text, unshifted
/// codepoint, then `Invalid` whenever text exists that the physical key may
/// disagree with, and only then the physical key.
pub fn resolve_key(raw: &RawKeyEvent, text: &str, composing: bool) -> Key {
    if composing {
        return Key::Invalid;
    }
    if let Some(key) = keyval_to_key(raw.keyval) {
        return key;
    }
    if let Some(key) = text
        .as_bytes()
        .first()
        .filter(|b| b.is_ascii())
        .and_then(|&b| Key::from_ascii(b))
    {
        return key;
    }
    if let Some(key) = raw.unshifted_codepoint.and_then(Key::from_char) {
        return key;
    }
    if !text.is_empty() || raw.unshifted_codepoint.is_some() {
        return Key::Invalid;
    }
    keycode_to_key(raw.keycode)
}

/// Per-surface composition state.
#[derive(Debug)]
pub struct InputReconciler {
    composing: bool,
    commit: String,
    in_keyevent: KeyEventState,
}

impl InputReconciler {
    pub fn new() -> Self {
        Self {
            composing: false,
            commit: String::with_capacity(COMMIT_CAPACITY),
            in_keyevent: KeyEventState::None,
        }
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn key_event_state(&self) -> KeyEventState {
        self.in_keyevent
    }

    /// Process one raw key press or release.
    pub fn key_event(
        &mut self,
        raw: &RawKeyEvent,
        im: &mut dyn InputMethod,
        core: &mut dyn TerminalCore,
    ) -> KeyDisposition {
        let prior_composing = self.composing;
        self.in_keyevent = if prior_composing {
            KeyEventState::Composing
        } else {
            KeyEventState::NotComposing
        };

        let filter = im.filter(raw);
        for signal in filter.signals {
            self.apply(signal, core);
        }

        let decision = decide(
            filter.handled,
            prior_composing,
            self.composing,
            self.commit.len(),
        );
        let disposition = match decision {
            Decision::Consumed => {
                debug!(keycode = raw.keycode, "key consumed by composition");
                KeyDisposition::Composing
            }
            Decision::Suppressed => {
                debug!(keycode = raw.keycode, prior_composing, "key suppressed by input method");
                KeyDisposition::Suppressed
            }
            Decision::Dispatch => {
                let event = self.build_event(raw, prior_composing);
                self.dispatch(event, im, core)
            }
        };

        self.commit.clear();
        self.in_keyevent = KeyEventState::None;
        disposition
    }

    /// Apply a signal the input method emitted outside any key event
    /// (on-screen keyboards, handwriting panels).
    pub fn ime_signal(&mut self, signal: ImeSignal, core: &mut dyn TerminalCore) {
        self.apply(signal, core);
    }

    /// The surface lost input focus: any composition is abandoned.
    pub fn focus_out(&mut self, im: &mut dyn InputMethod, core: &mut dyn TerminalCore) {
        if self.composing {
            self.close_preedit(core);
        }
        im.reset();
        self.commit.clear();
    }

    fn apply(&mut self, signal: ImeSignal, core: &mut dyn TerminalCore) {
        match signal {
            ImeSignal::PreeditStart => {
                debug!("preedit start");
                self.composing = true;
            }
            ImeSignal::PreeditChanged(text) => {
                if text.is_empty() && !self.composing {
                    return;
                }
                self.composing = true;
                if let Err(err) = core.preedit_callback(Some(&text)) {
                    error!(%err, "preedit callback failed");
                }
            }
            ImeSignal::PreeditEnd => {
                debug!("preedit end");
                if self.composing {
                    self.close_preedit(core);
                }
            }
            ImeSignal::Commit(text) => self.commit(text, core),
        }
    }

    fn commit(&mut self, text: String, core: &mut dyn TerminalCore) {
        match self.in_keyevent {
            KeyEventState::NotComposing => {
                if self.commit.len() + text.len() > COMMIT_CAPACITY {
                    warn!(
                        len = text.len(),
                        capacity = COMMIT_CAPACITY,
                        "committed text does not fit the commit buffer, dropped"
                    );
                    return;
                }
                self.commit.push_str(&text);
            }
            KeyEventState::Composing | KeyEventState::None => {
                if self.composing {
                    self.close_preedit(core);
                }
                debug!(len = text.len(), "dispatching committed text");
                if let Err(err) = core.key_callback(KeyEvent::text(text)) {
                    error!(%err, "key callback failed for committed text");
                }
            }
        }
    }

    fn close_preedit(&mut self, core: &mut dyn TerminalCore) {
        self.composing = false;
        if let Err(err) = core.preedit_callback(None) {
            error!(%err, "preedit callback failed");
        }
    }

    /// `composing` is the flag at entry; the logical key follows the flag
    /// after the input method ran, so a key that cancelled a dead key keeps
    /// its own identity.
    fn build_event(&self, raw: &RawKeyEvent, composing: bool) -> KeyEvent {
        let physical_key = keycode_to_key(raw.keycode);
        KeyEvent {
            action: raw.action,
            key: resolve_key(raw, &self.commit, self.composing),
            physical_key,
            mods: Modifiers::from_bits(raw.state).with_key(physical_key, raw.action),
            consumed_mods: Modifiers::from_bits(raw.consumed),
            composing,
            utf8: self.commit.clone(),
            unshifted_codepoint: raw.unshifted_codepoint,
        }
    }

    fn dispatch(
        &mut self,
        event: KeyEvent,
        im: &mut dyn InputMethod,
        core: &mut dyn TerminalCore,
    ) -> KeyDisposition {
        let action = event.action;
        let composing = event.composing;
        match core.key_callback(event) {
            Ok(effect) => {
                if effect == KeyEffect::Consumed && action.is_press() && composing {
                    // The core used the key itself; the composition is stale.
                    im.reset();
                    if self.composing {
                        self.close_preedit(core);
                    }
                }
                KeyDisposition::Dispatched(effect)
            }
            Err(err) => {
                error!(%err, "key callback failed");
                KeyDisposition::Failed
            }
        }
    }
}

impl Default for InputReconciler {
    fn default() -> Self {
        Self::new()
    }
}
