//! Error handling for the Appdeck core layer.
//!
//! Defines the error types shared by the foundational services of this crate
//! using `thiserror`. The main type is [`CoreError`], which wraps the more
//! specific [`ConfigError`] where appropriate.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Appdeck.
///
/// Represents all failures that can originate in the core layer. Higher
/// layers wrap this type rather than redefining its variants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// Errors from filesystem operations not covered by configuration I/O,
    /// such as creating a log directory.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors due to invalid input provided to a constructor or function.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while reading a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file contained invalid TOML.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but failed semantic validation.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. the XDG config home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}
