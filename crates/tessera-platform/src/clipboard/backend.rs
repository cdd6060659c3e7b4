use std::collections::HashMap;

use tessera_common::PlatformError;

use crate::terminal::ClipboardKind;

/// Clipboard transport. Reads are synchronous here; the bridge supplies the
/// asynchronous request/complete shape the terminal core expects.
pub trait ClipboardBackend {
    fn get(&mut self, kind: ClipboardKind) -> Result<String, PlatformError>;
    fn set(&mut self, kind: ClipboardKind, text: &str) -> Result<(), PlatformError>;
}

/// The desktop clipboard, backed by `arboard`. Only the standard clipboard
/// is available.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get(&mut self, kind: ClipboardKind) -> Result<String, PlatformError> {
        if kind != ClipboardKind::Standard {
            return Err(PlatformError::NotSupported(format!("{kind:?} clipboard")));
        }
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    fn set(&mut self, kind: ClipboardKind, text: &str) -> Result<(), PlatformError> {
        if kind != ClipboardKind::Standard {
            return Err(PlatformError::NotSupported(format!("{kind:?} clipboard")));
        }
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// An in-process clipboard holding every kind. Used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: HashMap<ClipboardKind, String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get(&mut self, kind: ClipboardKind) -> Result<String, PlatformError> {
        Ok(self.contents.get(&kind).cloned().unwrap_or_default())
    }

    fn set(&mut self, kind: ClipboardKind, text: &str) -> Result<(), PlatformError> {
        self.contents.insert(kind, text.to_string());
        Ok(())
    }
}
