use serde::{Deserialize, Serialize};

use super::{Key, KeyAction};

pub const SHIFT_MASK: u32 = 1 << 0;
pub const LOCK_MASK: u32 = 1 << 1;
pub const CONTROL_MASK: u32 = 1 << 2;
pub const ALT_MASK: u32 = 1 << 3;
pub const NUM_LOCK_MASK: u32 = 1 << 4;
pub const SUPER_MASK: u32 = 1 << 26;

/// Modifier key state, decoded from the host's modifier bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
}

impl Modifiers {
    /// Decode a GDK-style modifier state.
    pub fn from_bits(state: u32) -> Self {
        Self {
            shift: state & SHIFT_MASK != 0,
            ctrl: state & CONTROL_MASK != 0,
            alt: state & ALT_MASK != 0,
            super_key: state & SUPER_MASK != 0,
            caps_lock: state & LOCK_MASK != 0,
            num_lock: state & NUM_LOCK_MASK != 0,
        }
    }

    pub fn to_bits(self) -> u32 {
        let mut bits = 0;
        if self.shift {
            bits |= SHIFT_MASK;
        }
        if self.ctrl {
            bits |= CONTROL_MASK;
        }
        if self.alt {
            bits |= ALT_MASK;
        }
        if self.super_key {
            bits |= SUPER_MASK;
        }
        if self.caps_lock {
            bits |= LOCK_MASK;
        }
        if self.num_lock {
            bits |= NUM_LOCK_MASK;
        }
        bits
    }

    /// The host reports modifier state as it was *before* the event, so a
    /// press of Shift arrives without the shift bit. Fold the key's own
    /// effect in.
    pub fn with_key(mut self, key: Key, action: KeyAction) -> Self {
        let down = action.is_press();
        match key {
            Key::ShiftLeft | Key::ShiftRight => self.shift = down,
            Key::ControlLeft | Key::ControlRight => self.ctrl = down,
            Key::AltLeft | Key::AltRight => self.alt = down,
            Key::SuperLeft | Key::SuperRight => self.super_key = down,
            _ => {}
        }
        self
    }

    /// Whether any of shift, ctrl, alt, super is held. Lock keys do not count.
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.super_key
    }
}
