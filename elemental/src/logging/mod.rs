//! Structured logging infrastructure.
//!
//! Builds a tracing subscriber from [`LoggingConfig`], supporting different
//! output formats and an optional non-blocking log file. The subscriber is
//! installed globally at most once per process; re-initialization (for
//! example from a second context in the same test binary) is tolerated.

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error in subscriber setup
    #[error("Subscriber error: {0}")]
    Subscriber(String),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

// Keeps the non-blocking file writer alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the logging system with the given configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = level_filter(config.level);

    let result = match config.format {
        LogFormat::Json => init_json_logging(level, config),
        LogFormat::Compact => init_compact_logging(level, config),
        _ => init_pretty_logging(level, config),
    };

    // A subscriber installed earlier in the process is not an error.
    if let Err(LogError::Subscriber(ref message)) = result
        && message.contains("has already been set")
    {
        return Ok(());
    }

    result
}

/// Convert a config log level into a tracing level.
pub fn level_filter(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Initialize logging with JSON formatting
fn init_json_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    }

    Ok(())
}

/// Initialize logging with compact formatting
fn init_compact_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    }

    Ok(())
}

/// Initialize logging with pretty formatting
fn init_pretty_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
    }

    Ok(())
}

/// Create a non-blocking file writer whose worker outlives the caller.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(LogLevel::Trace), Level::TRACE);
        assert_eq!(level_filter(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        assert!(init(&config).is_ok());
        // A second call must not fail on the already-installed subscriber.
        assert!(init(&config).is_ok());
    }
}
