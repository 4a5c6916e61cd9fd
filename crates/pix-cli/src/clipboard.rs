//! System clipboard access.
//!
//! Tries the native clipboard via `arboard` first; when that is unavailable
//! (headless sessions, SSH) and stdout is a terminal, falls back to the OSC 52
//! escape sequence so the terminal emulator can do the copy.

use std::io::{IsTerminal, Write};

use pix_core::traits::{Clipboard, ClipboardError};

/// Clipboard of the machine running the CLI.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn copy_native(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match Self::copy_native(text) {
            Ok(()) => Ok(()),
            Err(native) => {
                tracing::debug!(error = %native, "Native clipboard failed, trying OSC 52");
                Self::copy_osc52(text).map_err(|_| native)
            }
        }
    }
}

/// OSC 52 format: ESC ] 52 ; c ; <base64-data> ESC \
fn osc52_sequence(text: &str) -> String {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x1b\\", encoded)
}
