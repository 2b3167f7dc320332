//! Clipboard seam — the one fallible external operation in the app.

use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

/// Why a clipboard write did not happen.
///
/// The underlying provider reports boxed trait-object errors; they are
/// flattened to strings here because the only consumer is a user-facing
/// notice.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write `text` to the system clipboard.
pub fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    Ok(())
}
