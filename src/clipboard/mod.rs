//! QueueClip - Clipboard module
//!
//! One-shot clipboard text access plus the change monitor

pub mod monitor;

pub use monitor::ClipboardMonitor;

use arboard::Clipboard;

/// Clipboard error type
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to read clipboard text: {0}")]
    Read(#[source] arboard::Error),
    #[error("failed to write clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Read the current clipboard text. Non-text content surfaces as a `Read`
/// error; callers that only care about "nothing usable" treat it as empty.
pub fn read_text() -> Result<String, ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
    clipboard.get_text().map_err(ClipboardError::Read)
}

/// Replace the clipboard contents with `text`.
pub fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
    clipboard.set_text(text.to_owned()).map_err(ClipboardError::Write)
}
