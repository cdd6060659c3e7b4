use serde::{Deserialize, Serialize};

/// A key identity, used both for the logical key (what the layout says the
/// key means) and the physical key (where it sits on a US keyboard).
///
/// `Invalid` is the "unknown / null" key: IME commits that do not belong to
/// any key carry it for both identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    #[default]
    Invalid,

    // -- Writing system keys --
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    BracketLeft,
    Backslash,
    BracketRight,
    Grave,

    // -- Control keys --
    Enter,
    Tab,
    Backspace,
    Escape,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CapsLock,

    // -- Function keys --
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // -- Modifiers --
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,

    // -- Numpad --
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
}

impl Key {
    /// The key that produces `byte` on a US layout, ignoring shift: both
    /// `a` and `A` are `Key::A`. Control bytes and non-ASCII have no key.
    pub fn from_ascii(byte: u8) -> Option<Key> {
        let key = match byte.to_ascii_lowercase() {
            b'a' => Key::A,
            b'b' => Key::B,
            b'c' => Key::C,
            b'd' => Key::D,
            b'e' => Key::E,
            b'f' => Key::F,
            b'g' => Key::G,
            b'h' => Key::H,
            b'i' => Key::I,
            b'j' => Key::J,
            b'k' => Key::K,
            b'l' => Key::L,
            b'm' => Key::M,
            b'n' => Key::N,
            b'o' => Key::O,
            b'p' => Key::P,
            b'q' => Key::Q,
            b'r' => Key::R,
            b's' => Key::S,
            b't' => Key::T,
            b'u' => Key::U,
            b'v' => Key::V,
            b'w' => Key::W,
            b'x' => Key::X,
            b'y' => Key::Y,
            b'z' => Key::Z,
            b'0' => Key::Digit0,
            b'1' => Key::Digit1,
            b'2' => Key::Digit2,
            b'3' => Key::Digit3,
            b'4' => Key::Digit4,
            b'5' => Key::Digit5,
            b'6' => Key::Digit6,
            b'7' => Key::Digit7,
            b'8' => Key::Digit8,
            b'9' => Key::Digit9,
            b' ' => Key::Space,
            b'\'' => Key::Apostrophe,
            b',' => Key::Comma,
            b'-' => Key::Minus,
            b'.' => Key::Period,
            b'/' => Key::Slash,
            b';' => Key::Semicolon,
            b'=' => Key::Equal,
            b'[' => Key::BracketLeft,
            b'\\' => Key::Backslash,
            b']' => Key::BracketRight,
            b'`' => Key::Grave,
            b'\r' | b'\n' => Key::Enter,
            b'\t' => Key::Tab,
            0x1b => Key::Escape,
            0x7f => Key::Backspace,
            _ => return None,
        };
        Some(key)
    }

    /// The same as [`Key::from_ascii`] for a `char`, rejecting anything
    /// outside ASCII.
    pub fn from_char(c: char) -> Option<Key> {
        if c.is_ascii() {
            Key::from_ascii(c as u8)
        } else {
            None
        }
    }

    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::ShiftLeft
                | Key::ShiftRight
                | Key::ControlLeft
                | Key::ControlRight
                | Key::AltLeft
                | Key::AltRight
                | Key::SuperLeft
                | Key::SuperRight
        )
    }
}

/// What the physical key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    #[default]
    Press,
    Release,
    Repeat,
}

impl KeyAction {
    pub fn is_press(self) -> bool {
        matches!(self, KeyAction::Press | KeyAction::Repeat)
    }
}
