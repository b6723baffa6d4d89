//! Logging setup for Appdeck.
//!
//! Built on the `tracing` ecosystem: a console layer on stderr plus an
//! optional rolling file layer with text or JSON formatting, configured from
//! [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::CoreError;
use crate::utils::fs::ensure_dir_exists;

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Holds the file-logging worker guard for the lifetime of the process so
/// buffered log lines are flushed on shutdown.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup directed at `stderr`.
///
/// Intended for tests and early startup before configuration is loaded.
/// Filters via `RUST_LOG`, defaulting to "info". Errors (e.g. a subscriber
/// is already set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates the optional file layer and its worker guard.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("appdeck.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format.to_lowercase().as_str() {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer().with_writer(non_blocking_writer).with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// Sets a console layer filtered by the configured level (`RUST_LOG`
/// overrides it when present) and, when `file_path` is set, a daily-rolling
/// file layer in the configured format.
///
/// # Errors
///
/// Returns [`CoreError::LoggingInitialization`] if the level is unknown or a
/// global subscriber is already installed, and [`CoreError::Filesystem`] if
/// the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            return Err(CoreError::LoggingInitialization(format!(
                "Unknown log level '{}'",
                other
            )))
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    let mut file_layer: Option<Box<dyn Layer<Registry> + Send + Sync + 'static>> = None;
    if let Some(path) = &config.file_path {
        let (layer, guard) = create_file_layer(path, &config.format)?;
        file_layer = Some(layer);
        *LOG_WORKER_GUARD
            .lock()
            .map_err(|_| CoreError::LoggingInitialization("Guard mutex poisoned".to_string()))? =
            Some(guard);
    }

    // The boxed file layer is typed against `Registry`, so it must be the
    // innermost layer in the composition.
    Registry::default()
        .with(file_layer)
        .with(console_layer)
        .with(filter)
        .try_init()
        .map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;

    tracing::info!(
        level = %level,
        file = ?config.file_path,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    #[test]
    fn init_logging_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        let result = init_logging(&config);
        assert!(matches!(result, Err(CoreError::LoggingInitialization(_))));
    }

    #[test]
    fn init_minimal_logging_is_idempotent() {
        // Both calls must be safe even though only the first can win the
        // global subscriber slot.
        init_minimal_logging();
        init_minimal_logging();
    }

    #[test]
    fn create_file_layer_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("logs").join("appdeck.log");
        let (_layer, _guard) = create_file_layer(&log_path, "text").unwrap();
        assert!(log_path.parent().unwrap().is_dir());
    }

    #[test]
    fn create_file_layer_accepts_json_format() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("appdeck.log");
        assert!(create_file_layer(&log_path, "json").is_ok());
    }
}
