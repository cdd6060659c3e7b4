//! Key model: logical/physical keys, native keycode and keysym tables, and
//! modifier decoding.

mod keycode;
mod keyval;
mod modifiers;
mod types;

pub use keycode::keycode_to_key;
pub use keyval::{
    is_dead_key, keyval_to_char, keyval_to_key, KEYVAL_BACKSPACE, KEYVAL_DELETE, KEYVAL_ESCAPE,
    KEYVAL_RETURN, KEYVAL_TAB,
};
pub use modifiers::{
    Modifiers, ALT_MASK, CONTROL_MASK, LOCK_MASK, NUM_LOCK_MASK, SHIFT_MASK, SUPER_MASK,
};
pub use types::{Key, KeyAction};
