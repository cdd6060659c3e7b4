pub mod clipboard;
pub mod env;
pub mod ime;
pub mod keys;
pub mod mouse;
pub mod terminal;

pub use clipboard::{ClipboardBackend, ClipboardBridge, MemoryClipboard, SystemClipboard};
pub use env::{cgroup_path, default_environment, EnvMap};
pub use ime::{InputMethod, InputReconciler, KeyDisposition, RawKeyEvent};
pub use keys::{Key, KeyAction, Modifiers};
pub use terminal::{KeyEffect, KeyEvent, RecordingCore, TerminalCore};
