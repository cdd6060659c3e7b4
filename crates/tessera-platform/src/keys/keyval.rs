//! X11 keysym (GDK keyval) to logical key translation.
//!
//! Keysyms 0x20..=0x7e coincide with ASCII. Dead keys and keysyms for
//! characters outside ASCII have no logical key; the reconciler falls back
//! to committed text for those.

use super::Key;

pub const KEYVAL_BACKSPACE: u32 = 0xff08;
pub const KEYVAL_TAB: u32 = 0xff09;
pub const KEYVAL_RETURN: u32 = 0xff0d;
pub const KEYVAL_ESCAPE: u32 = 0xff1b;
pub const KEYVAL_DELETE: u32 = 0xffff;

/// First and last dead-key keysyms (`dead_grave` .. `dead_greek`).
const DEAD_KEYS: std::ops::RangeInclusive<u32> = 0xfe50..=0xfe8c;

/// Map a keysym to the logical key it names, if any.
pub fn keyval_to_key(keyval: u32) -> Option<Key> {
    if (0x20..=0x7e).contains(&keyval) {
        return Key::from_ascii(keyval as u8);
    }
    if DEAD_KEYS.contains(&keyval) {
        return None;
    }

    let key = match keyval {
        KEYVAL_BACKSPACE => Key::Backspace,
        KEYVAL_TAB | 0xfe20 => Key::Tab, // Tab, ISO_Left_Tab
        KEYVAL_RETURN => Key::Enter,
        KEYVAL_ESCAPE => Key::Escape,
        KEYVAL_DELETE => Key::Delete,
        0xff63 => Key::Insert,
        0xff50 => Key::Home,
        0xff57 => Key::End,
        0xff55 => Key::PageUp,
        0xff56 => Key::PageDown,
        0xff51 => Key::ArrowLeft,
        0xff52 => Key::ArrowUp,
        0xff53 => Key::ArrowRight,
        0xff54 => Key::ArrowDown,
        0xffe5 => Key::CapsLock,

        0xffbe => Key::F1,
        0xffbf => Key::F2,
        0xffc0 => Key::F3,
        0xffc1 => Key::F4,
        0xffc2 => Key::F5,
        0xffc3 => Key::F6,
        0xffc4 => Key::F7,
        0xffc5 => Key::F8,
        0xffc6 => Key::F9,
        0xffc7 => Key::F10,
        0xffc8 => Key::F11,
        0xffc9 => Key::F12,

        0xffe1 => Key::ShiftLeft,
        0xffe2 => Key::ShiftRight,
        0xffe3 => Key::ControlLeft,
        0xffe4 => Key::ControlRight,
        0xffe9 => Key::AltLeft,
        0xffea => Key::AltRight,
        0xffeb => Key::SuperLeft,
        0xffec => Key::SuperRight,

        0xffb0 => Key::Numpad0,
        0xffb1 => Key::Numpad1,
        0xffb2 => Key::Numpad2,
        0xffb3 => Key::Numpad3,
        0xffb4 => Key::Numpad4,
        0xffb5 => Key::Numpad5,
        0xffb6 => Key::Numpad6,
        0xffb7 => Key::Numpad7,
        0xffb8 => Key::Numpad8,
        0xffb9 => Key::Numpad9,
        0xffab => Key::NumpadAdd,
        0xffad => Key::NumpadSubtract,
        0xffaa => Key::NumpadMultiply,
        0xffaf => Key::NumpadDivide,
        0xffae => Key::NumpadDecimal,
        0xff8d => Key::NumpadEnter,

        _ => return None,
    };
    Some(key)
}

/// Whether the keysym is a dead key (accent prefix).
pub fn is_dead_key(keyval: u32) -> bool {
    DEAD_KEYS.contains(&keyval)
}

/// The character a printable keysym stands for. Latin-1 keysyms equal their
/// code point; keysyms with the 0x0100_0000 bit carry a Unicode code point.
pub fn keyval_to_char(keyval: u32) -> Option<char> {
    match keyval {
        0x20..=0x7e | 0xa0..=0xff => char::from_u32(keyval),
        0x0100_0100..=0x0110_ffff => char::from_u32(keyval - 0x0100_0000),
        _ => None,
    }
}
