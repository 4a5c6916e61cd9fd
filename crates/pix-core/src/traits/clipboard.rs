//! Clipboard trait.

use thiserror::Error;

/// Clipboard operation errors.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Somewhere the PIX screen can put the payment code.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
