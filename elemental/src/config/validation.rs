//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;
use crate::elements::{ElementId, Relation};
use std::collections::HashSet;

/// Validate the entire configuration.
pub fn validate_config(config: &ElementalConfig) -> Result<(), ConfigError> {
    validate_elements_config(&config.elements)?;

    Ok(())
}

/// Validate element and relation seeds.
fn validate_elements_config(config: &ElementsConfig) -> Result<(), ConfigError> {
    validate_relation_value(&config.default_relation, "default_relation")?;

    let mut seen = HashSet::new();
    for seed in &config.seed {
        let id = ElementId::new(&seed.id).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid seed element id '{}': {}", seed.id, e))
        })?;
        if !seen.insert(id) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate seed element id '{}'",
                seed.id
            )));
        }
    }

    for relation in &config.relations {
        for endpoint in [&relation.from, &relation.to] {
            let id = ElementId::new(endpoint).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Invalid relation endpoint '{}': {}",
                    endpoint, e
                ))
            })?;
            if !seen.contains(&id) {
                return Err(ConfigError::ValidationError(format!(
                    "Relation endpoint '{}' is not a seeded element",
                    endpoint
                )));
            }
        }
        validate_relation_value(
            &relation.relation,
            &format!("relation {} -> {}", relation.from, relation.to),
        )?;
    }

    Ok(())
}

/// Validate a relation value; only custom multipliers can be out of range.
fn validate_relation_value(relation: &Relation, context: &str) -> Result<(), ConfigError> {
    if let Relation::Custom {
        multiplier,
        inverse_multiplier,
    } = relation
    {
        for value in [*multiplier, *inverse_multiplier] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Custom multiplier for {} must be finite and positive, got {}",
                    context, value
                )));
            }
        }
    }

    Ok(())
}
