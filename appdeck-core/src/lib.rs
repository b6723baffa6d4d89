//! # Appdeck Core Library (`appdeck-core`)
//!
//! Foundational layer for Appdeck, the internal application registry tool.
//! It provides the services every other layer builds on:
//!
//! - **Error handling**: the [`CoreError`] enum and its specific companions
//!   such as [`ConfigError`].
//! - **Configuration**: TOML-based loading with default fallbacks and
//!   validation via [`config::ConfigLoader`] and [`config::AppdeckConfig`].
//! - **Logging**: a `tracing`-based setup with console and optional file
//!   output, see [`logging::init_logging`].
//! - **Base types**: validated newtypes such as [`types::AppLabel`].
//!
//! ```rust,ignore
//! use appdeck_core::config::ConfigLoader;
//! use appdeck_core::logging::init_logging;
//!
//! fn main() -> Result<(), appdeck_core::CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging)?;
//!     tracing::info!("Appdeck core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{AppdeckConfig, ApplicationSeed, ConfigLoader, LoggingConfig, RegistryConfig, UiConfig};
pub use error::{ConfigError, CoreError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::AppLabel;
