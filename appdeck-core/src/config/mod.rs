//! Configuration management for Appdeck.
//!
//! TOML-based configuration with default fallbacks and validation. See
//! [`types::AppdeckConfig`] for the schema and [`loader::ConfigLoader`] for
//! file resolution.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{validate_config, ConfigLoader};
pub use types::{AppdeckConfig, ApplicationSeed, LoggingConfig, RegistryConfig, UiConfig};
