//! Configuration loading and validation.
//!
//! Resolves the configuration file from the platform config directory,
//! parses it as TOML, and validates the result. A missing file is not an
//! error: defaults are used instead, so a fresh installation starts with a
//! working (empty) registry.

use super::types::AppdeckConfig;
use crate::error::{ConfigError, CoreError};
use directories_next::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE_NAME: &str = "config.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Loads and validates the Appdeck configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the platform config directory
    /// (`$XDG_CONFIG_HOME/appdeck/config.toml` on Linux).
    ///
    /// Falls back to [`AppdeckConfig::default`] when no file exists.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if the config directory cannot be
    /// determined, the file cannot be read, the TOML is invalid, or
    /// validation fails.
    pub fn load() -> Result<AppdeckConfig, CoreError> {
        let path = Self::default_config_path()?;
        if !path.exists() {
            info!("No configuration file at {:?}; using defaults", path);
            let config = AppdeckConfig::default();
            validate_config(&config)?;
            return Ok(config);
        }
        Self::load_from_path(&path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// Unlike [`ConfigLoader::load`], a missing file here is an error: the
    /// caller asked for that specific file.
    pub fn load_from_path(path: &Path) -> Result<AppdeckConfig, CoreError> {
        debug!("Loading configuration from {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| {
            CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let config: AppdeckConfig =
            toml::from_str(&content).map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Resolves the expected configuration file path for this platform.
    pub fn default_config_path() -> Result<PathBuf, CoreError> {
        let dirs = ProjectDirs::from("org", "Appdeck", "appdeck").ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "project config directory".to_string(),
            })
        })?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Validates semantic constraints that TOML parsing cannot express.
///
/// # Errors
///
/// Returns [`CoreError::Config`] wrapping a
/// [`ConfigError::ValidationError`] naming the offending field.
pub fn validate_config(config: &AppdeckConfig) -> Result<(), CoreError> {
    let level = config.logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(CoreError::Config(ConfigError::ValidationError(format!(
            "Invalid logging.level '{}'. Expected one of: {}",
            config.logging.level,
            VALID_LOG_LEVELS.join(", ")
        ))));
    }

    let format = config.logging.format.to_lowercase();
    if !VALID_LOG_FORMATS.contains(&format.as_str()) {
        return Err(CoreError::Config(ConfigError::ValidationError(format!(
            "Invalid logging.format '{}'. Expected one of: {}",
            config.logging.format,
            VALID_LOG_FORMATS.join(", ")
        ))));
    }

    if config.registry.page_size == 0 {
        return Err(CoreError::Config(ConfigError::ValidationError(
            "registry.page_size must be at least 1".to_string(),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LoggingConfig;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_from_path_reads_valid_file() {
        let file = write_temp_config(
            r#"
            [logging]
            level = "debug"

            [registry]
            page_size = 5

            [[registry.applications]]
            label = "Metrics"
            protocol = "https"
            host = "metrics.internal"
            port = 443
            "#,
        );
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.registry.page_size, 5);
        assert_eq!(config.registry.applications.len(), 1);
    }

    #[test]
    fn load_from_path_missing_file_is_read_error() {
        let result = ConfigLoader::load_from_path(Path::new("/nonexistent/appdeck.toml"));
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ReadError { .. }))
        ));
    }

    #[test]
    fn load_from_path_invalid_toml_is_parse_error() {
        let file = write_temp_config("this is not toml ===");
        let result = ConfigLoader::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn validate_config_rejects_unknown_level() {
        let config = AppdeckConfig {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..LoggingConfig::default()
            },
            ..AppdeckConfig::default()
        };
        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ValidationError(msg))) if msg.contains("logging.level")
        ));
    }

    #[test]
    fn validate_config_rejects_unknown_format() {
        let config = AppdeckConfig {
            logging: LoggingConfig {
                format: "xml".to_string(),
                ..LoggingConfig::default()
            },
            ..AppdeckConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn validate_config_rejects_zero_page_size() {
        let file = write_temp_config(
            r#"
            [registry]
            page_size = 0
            "#,
        );
        let result = ConfigLoader::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ValidationError(msg))) if msg.contains("page_size")
        ));
    }

    #[test]
    fn validate_config_accepts_defaults() {
        assert!(validate_config(&AppdeckConfig::default()).is_ok());
    }

    #[test]
    fn level_validation_is_case_insensitive() {
        let config = AppdeckConfig {
            logging: LoggingConfig {
                level: "DEBUG".to_string(),
                ..LoggingConfig::default()
            },
            ..AppdeckConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
