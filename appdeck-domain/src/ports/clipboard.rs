//! Port for writing text to the system clipboard.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard could not be accessed at all.
    #[error("Failed to access clipboard: {0}")]
    AccessFailed(String),

    /// The write was attempted but rejected or failed.
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    /// No clipboard capability exists in this context.
    #[error("Clipboard is not available in this context")]
    Unavailable,
}

/// Capability surface for clipboard writes.
///
/// Two mechanisms are modeled, matching what hosting environments offer:
/// an asynchronous write that requires a secure context, and a legacy
/// selection-based copy that works from a transient scratch buffer. The
/// interaction layer prefers the asynchronous path and falls back to the
/// legacy one.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Whether the hosting context is privileged enough for the
    /// asynchronous clipboard.
    fn is_secure_context(&self) -> bool;

    /// Whether the asynchronous clipboard capability exists.
    fn has_async_clipboard(&self) -> bool;

    /// Whether the legacy selection-copy mechanism exists.
    fn has_legacy_copy(&self) -> bool;

    /// Writes text via the asynchronous clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the capability is missing or the
    /// write is rejected.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Copies the current contents of a selection via the legacy copy
    /// command. `selection` is the text held by the caller's scratch buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the command reports failure.
    fn legacy_copy(&self, selection: &str) -> Result<(), ClipboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_error_messages() {
        assert_eq!(
            ClipboardError::AccessFailed("denied".to_string()).to_string(),
            "Failed to access clipboard: denied"
        );
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "Clipboard is not available in this context"
        );
    }
}
