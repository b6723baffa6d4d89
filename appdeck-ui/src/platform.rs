//! System adapters for the platform capability ports.
//!
//! These back the ports with the host desktop: the default URL handler for
//! opening a browsing context and the system clipboard for copying. Tests
//! never touch these; they substitute mocks at the port seam.

use appdeck_domain::ports::{Clipboard, ClipboardError, ContextOpener, OpenError, OpenOutcome};
use async_trait::async_trait;
use clipboard_rs::{Clipboard as _, ClipboardContext};
use url::Url;

/// Opens addresses with the host's default URL handler.
#[derive(Debug, Default)]
pub struct SystemContextOpener;

impl SystemContextOpener {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContextOpener for SystemContextOpener {
    async fn open(&self, url: &Url) -> Result<OpenOutcome, OpenError> {
        let target = url.to_string();
        let spawned = tokio::task::spawn_blocking(move || open::that(&target)).await;
        match spawned {
            // The desktop handler takes focus itself; there is no separate
            // focus step to fail.
            Ok(Ok(())) => Ok(OpenOutcome::Opened { focused: true }),
            Ok(Err(source)) => Err(OpenError::LaunchFailed {
                url: url.to_string(),
                source,
            }),
            Err(join_error) => Err(OpenError::Unexpected {
                url: url.to_string(),
                message: join_error.to_string(),
            }),
        }
    }
}

/// Writes text to the system clipboard.
///
/// A native process always runs in a privileged context, so only the
/// asynchronous path exists; there is no legacy selection mechanism to fall
/// back to.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn is_secure_context(&self) -> bool {
        true
    }

    fn has_async_clipboard(&self) -> bool {
        true
    }

    fn has_legacy_copy(&self) -> bool {
        false
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let ctx = ClipboardContext::new()
                .map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
            ctx.set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::AccessFailed(e.to_string()))?
    }

    fn legacy_copy(&self, _selection: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clipboard_reports_capabilities() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.is_secure_context());
        assert!(clipboard.has_async_clipboard());
        assert!(!clipboard.has_legacy_copy());
    }

    #[test]
    fn system_clipboard_legacy_path_is_unavailable() {
        let clipboard = SystemClipboard::new();
        assert!(matches!(
            clipboard.legacy_copy("text"),
            Err(ClipboardError::Unavailable)
        ));
    }
}
