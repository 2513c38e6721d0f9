//! Configuration model definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::elements::Relation;

/// Main configuration structure for Elemental.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementalConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Element and relation seeding
    pub elements: ElementsConfig,
}

/// Declarative element and relation seeding.
///
/// Seeded elements are registered in declaration order, so the first entry
/// becomes the default element.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementsConfig {
    /// Fallback relation for pairs without an explicit entry
    pub default_relation: Relation,

    /// Elements registered when a context is built from this configuration
    pub seed: Vec<ElementSeed>,

    /// Relations applied after the seed elements are registered
    pub relations: Vec<RelationSeed>,
}

/// One element to register at context construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSeed {
    /// Case-insensitive element id
    pub id: String,

    /// Optional human-readable name
    pub display_name: Option<String>,
}

/// One directional relation entry; the reverse direction is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationSeed {
    /// Source element id (must appear in the seed list)
    pub from: String,

    /// Target element id (must appear in the seed list)
    pub to: String,

    /// Relation stored at (from, to); its inverse lands at (to, from)
    pub relation: Relation,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Default
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}
