//! Port for opening an address in a new browsing context.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Result of asking the environment to open a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A context was obtained. `focused` reports whether it could be brought
    /// to the foreground.
    Opened { focused: bool },
    /// The environment refused to open a context (e.g. pop-up suppression).
    Refused,
}

/// Errors raised while launching a browsing context.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The platform handler could not be launched at all.
    #[error("Failed to launch handler for {url}")]
    LaunchFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other unexpected failure. Callers convert this into a generic
    /// error notification rather than letting it propagate.
    #[error("Unexpected failure opening {url}: {message}")]
    Unexpected { url: String, message: String },
}

/// Capability for opening a validated address in a new browsing context.
///
/// The interaction layer performs scheme validation before calling this;
/// implementations may assume the URL is well-formed.
#[async_trait]
pub trait ContextOpener: Send + Sync {
    async fn open(&self, url: &Url) -> Result<OpenOutcome, OpenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_launch_failed_display_names_url() {
        let err = OpenError::LaunchFailed {
            url: "http://wiki.corp:8080".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
        };
        assert_eq!(err.to_string(), "Failed to launch handler for http://wiki.corp:8080");
    }

    #[test]
    fn open_outcome_equality() {
        assert_eq!(
            OpenOutcome::Opened { focused: true },
            OpenOutcome::Opened { focused: true }
        );
        assert_ne!(OpenOutcome::Opened { focused: false }, OpenOutcome::Refused);
    }
}
