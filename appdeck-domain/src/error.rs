//! Error handling for the Appdeck domain layer.
//!
//! [`DomainError`] is the umbrella type; module-local enums
//! ([`crate::registry::RegistryError`], [`crate::ports::OpenError`],
//! [`crate::ports::ClipboardError`]) carry the specifics.

use crate::ports::{ClipboardError, OpenError};
use crate::registry::RegistryError;
use appdeck_core::error::CoreError;
use thiserror::Error;

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Umbrella error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Errors from the application registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Errors from the context-opening capability.
    #[error("Open error: {0}")]
    Open(#[from] OpenError),

    /// Errors from the clipboard capability.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Errors bubbled up from the core layer.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn domain_error_wraps_registry_error() {
        let err: DomainError = RegistryError::InvalidPort { value: 0 }.into();
        assert!(matches!(err, DomainError::Registry(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn domain_error_wraps_clipboard_error() {
        let err: DomainError = ClipboardError::Unavailable.into();
        assert_eq!(
            err.to_string(),
            "Clipboard error: Clipboard is not available in this context"
        );
    }
}
