//! Error types for the application registry.

use appdeck_core::error::CoreError;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced while validating or querying registered applications.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The protocol name is not one of the accepted choices.
    #[error("Unknown protocol '{name}'. Expected one of: ftp, http, https, tcp, udp")]
    UnknownProtocol { name: String },

    /// The port number lies outside the valid range.
    #[error("Port number must be between 1 and 65535. Got: {value}")]
    InvalidPort { value: u32 },

    /// The host name is malformed.
    #[error("Invalid host: {reason}")]
    InvalidHost { reason: String },

    /// The application label failed validation.
    #[error("Invalid label: {0}")]
    InvalidLabel(#[from] CoreError),

    /// No application with the given id is registered.
    #[error("No application registered with id {id}")]
    NotFound { id: Uuid },

    /// The requested listing page does not exist.
    #[error("Page {index} is out of range (total pages: {total_pages})")]
    PageOutOfRange { index: usize, total_pages: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_message_matches_contract() {
        let err = RegistryError::InvalidPort { value: 70000 };
        assert_eq!(
            err.to_string(),
            "Port number must be between 1 and 65535. Got: 70000"
        );
    }

    #[test]
    fn invalid_label_wraps_core_error() {
        let core = CoreError::InvalidInput("empty".to_string());
        let err: RegistryError = core.into();
        assert!(matches!(err, RegistryError::InvalidLabel(_)));
    }
}
