//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Copy command output to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(bytes = text.len(), "Copied output to clipboard");
    Ok(())
}
