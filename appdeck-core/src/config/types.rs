//! Configuration data structures for Appdeck.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to the functions in [`super::defaults`], and
//! unknown fields are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// Used by `appdeck_core::logging` to initialize the global logger.
///
/// # Examples
///
/// ```
/// use appdeck_core::config::LoggingConfig;
///
/// let config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.format, "json");
/// assert_eq!(config.file_path, None);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level_spec")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path_spec")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages written to a file.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format_spec")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level_spec(),
            file_path: defaults::default_log_file_path_spec(),
            format: defaults::default_log_format_spec(),
        }
    }
}

/// One application entry seeded into the registry at startup.
///
/// Kept as plain data here; semantic validation (protocol names, port range,
/// label rules) happens in the domain layer when the registry is seeded.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApplicationSeed {
    /// Human-readable display name shown on the application's card.
    pub label: String,
    /// Protocol name, one of: "http", "https", "ftp", "tcp", "udp".
    pub protocol: String,
    /// Hostname or address, without scheme or port.
    pub host: String,
    /// Port number. Must be within 1..=65535.
    pub port: u32,
}

/// Configuration for the application registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Number of applications per listing page.
    #[serde(default = "defaults::default_page_size")]
    pub page_size: usize,
    /// Applications registered at startup.
    #[serde(default)]
    pub applications: Vec<ApplicationSeed>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::default_page_size(),
            applications: Vec::new(),
        }
    }
}

/// Configuration for the interaction layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Whether the page-level keyboard shortcuts are registered.
    #[serde(default = "defaults::default_keyboard_shortcuts")]
    pub keyboard_shortcuts: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            keyboard_shortcuts: defaults::default_keyboard_shortcuts(),
        }
    }
}

/// Root configuration structure for Appdeck.
///
/// # Examples
///
/// ```
/// use appdeck_core::config::AppdeckConfig;
///
/// let config: AppdeckConfig = toml::from_str(r#"
/// [logging]
/// level = "warn"
///
/// [registry]
/// page_size = 10
///
/// [[registry.applications]]
/// label = "Grafana"
/// protocol = "https"
/// host = "grafana.internal"
/// port = 3000
/// "#).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.registry.page_size, 10);
/// assert_eq!(config.registry.applications.len(), 1);
/// assert!(config.ui.keyboard_shortcuts);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppdeckConfig {
    /// Configuration for the logging subsystem.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Configuration for the application registry.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Configuration for the interaction layer.
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn logging_config_default_values() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn registry_config_default_values() {
        let config = RegistryConfig::default();
        assert_eq!(config.page_size, 20);
        assert!(config.applications.is_empty());
    }

    #[test]
    fn appdeck_config_from_empty_toml_uses_defaults() {
        let config: AppdeckConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.registry.page_size, 20);
        assert!(config.ui.keyboard_shortcuts);
    }

    #[test]
    fn appdeck_config_rejects_unknown_fields() {
        let result: Result<AppdeckConfig, _> = toml::from_str("unknown_section = 1");
        assert!(result.is_err());
    }

    #[test]
    fn application_seed_deserializes_all_fields() {
        let seed: ApplicationSeed = toml::from_str(
            r#"
            label = "Internal Wiki"
            protocol = "http"
            host = "wiki.corp"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(
            seed,
            ApplicationSeed {
                label: "Internal Wiki".to_string(),
                protocol: "http".to_string(),
                host: "wiki.corp".to_string(),
                port: 8080,
            }
        );
    }

    #[test]
    fn application_seed_requires_mandatory_fields() {
        let result: Result<ApplicationSeed, _> = toml::from_str(r#"label = "x""#);
        assert!(result.is_err());
    }
}
