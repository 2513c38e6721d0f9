//! Configuration builder.
//!
//! Builder pattern API for creating configurations programmatically.

use super::{Result, models::*, validation};
use crate::elements::Relation;
use std::path::Path;

/// Builder for creating [`ElementalConfig`] instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ElementalConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ElementalConfig::default(),
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the fallback relation for unspecified pairs.
    pub fn with_default_relation(mut self, relation: Relation) -> Self {
        self.config.elements.default_relation = relation;
        self
    }

    /// Seed an element. The first seeded element becomes the default element.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.config.elements.seed.push(ElementSeed {
            id: id.into(),
            display_name: None,
        });
        self
    }

    /// Seed an element with a display name.
    pub fn with_named_element(
        mut self,
        id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.config.elements.seed.push(ElementSeed {
            id: id.into(),
            display_name: Some(display_name.into()),
        });
        self
    }

    /// Seed a directional relation between two seeded elements.
    pub fn with_relation(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        relation: Relation,
    ) -> Self {
        self.config.elements.relations.push(RelationSeed {
            from: from.into(),
            to: to.into(),
            relation,
        });
        self
    }

    /// Create a configuration for development: console logging at Debug level.
    pub fn development() -> Self {
        Self::new().with_log_level(LogLevel::Debug)
    }

    /// Create a configuration for automated testing: quiet console logging.
    pub fn testing() -> Self {
        Self::new().with_log_level(LogLevel::Warn)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<ElementalConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
