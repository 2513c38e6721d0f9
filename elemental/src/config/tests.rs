#[cfg(test)]
mod tests {
    use crate::config::{ConfigBuilder, ElementalConfig, LogFormat, LogLevel, validation};
    use crate::elements::Relation;

    #[test]
    fn test_default_config() {
        let config = ElementalConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Default);
        assert!(config.logging.stdout);
        assert_eq!(config.elements.default_relation, Relation::Neutral);
        assert!(config.elements.seed.is_empty());
        assert!(config.elements.relations.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_log_level(LogLevel::Debug)
            .with_default_relation(Relation::MutualWeak)
            .with_element("fire")
            .with_named_element("water", "Deep Water")
            .with_relation("fire", "water", Relation::Weak)
            .build()
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.elements.default_relation, Relation::MutualWeak);
        assert_eq!(config.elements.seed.len(), 2);
        assert_eq!(
            config.elements.seed[1].display_name.as_deref(),
            Some("Deep Water")
        );
        assert_eq!(config.elements.relations[0].relation, Relation::Weak);
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(test.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_duplicate_seed_element_rejected() {
        let result = ConfigBuilder::new()
            .with_element("fire")
            .with_element("Fire")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_relation_endpoint_must_be_seeded() {
        let result = ConfigBuilder::new()
            .with_element("fire")
            .with_relation("fire", "void", Relation::Strong)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_multiplier_must_be_positive() {
        let result = ConfigBuilder::new()
            .with_element("fire")
            .with_element("water")
            .with_relation(
                "fire",
                "water",
                Relation::Custom {
                    multiplier: 0.0,
                    inverse_multiplier: 2.0,
                },
            )
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = ElementalConfig::default();
        assert!(validation::validate_config(&config).is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_element("fire")
            .with_element("water")
            .with_relation("fire", "water", Relation::Strong)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ElementalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.elements.seed.len(), 2);
        assert_eq!(deserialized.elements.relations[0].relation, Relation::Strong);
    }
}
