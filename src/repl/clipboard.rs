//! Clipboard access for the `copy` command of the interactive loop.

use anyhow::Context;
use arboard::Clipboard;

/// Put the current display text on the system clipboard.
pub fn copy_display(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to copy to clipboard")
}
