//! Configuration system for Elemental.
//!
//! Supports loading configuration from multiple sources (files, environment
//! variables, builders) with validation and defaults. Besides logging
//! settings, a configuration can declaratively seed a context with elements
//! and relations.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "elemental.toml",
    "elemental.yaml",
    "elemental.yml",
    "elemental.json",
    ".elemental/config.toml",
    ".elemental/config.yaml",
    ".elemental/config.yml",
    ".elemental/config.json",
];

/// Environment variable prefix for Elemental configuration
pub const ENV_PREFIX: &str = "ELEMENTAL_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),

    /// General error
    #[error("{0}")]
    Other(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
