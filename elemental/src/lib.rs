//! # Elemental
//!
//! A small relation model for host applications that define a closed set of
//! named element categories (damage types, factions, affinities) and a
//! directional strength multiplier between ordered pairs of them. Setting a
//! relation in one direction automatically derives and stores the correct
//! relation for the reverse direction.
//!
//! ## Quick Start
//!
//! ```rust
//! use elemental::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let context = Context::new();
//!     context.register(Element::new("fire")?);
//!     context.register(Element::new("water")?);
//!
//!     // One call stores both directions: FIRE -> WATER is strong,
//!     // WATER -> FIRE is derived as weak.
//!     context.set_relation_between("fire", "water", Relation::Strong)?;
//!
//!     assert_eq!(context.relation_between("fire", "water").multiplier(), 2.0);
//!     assert_eq!(context.relation_between("water", "fire").multiplier(), 0.5);
//!
//!     // Pairs without an explicit entry fall back to the default relation.
//!     assert_eq!(context.relation_between("water", "water"), Relation::Neutral);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Core**: element registry, relation values with inverse resolution, and
//!   the pairwise relation table with its bidirectional invariant
//! - **Context**: an explicitly constructed, cloneable aggregate of one
//!   registry and one table; independent contexts can coexist
//! - **Boundary**: an [`store::AttributeStore`] capability for persisting
//!   element ids on host-owned records, with an in-memory implementation
//!
//! Contexts can also be seeded declaratively from configuration files; see
//! [`config::ConfigLoader`] and [`init`].

pub mod config;
pub mod elements;
pub mod logging;
pub mod store;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export core initialization functions
    pub use crate::{init, init_with_defaults};

    // Re-export element and relation types
    pub use crate::elements::{Context, Element, ElementId, ElementRegistry, Relation, RelationTable};

    // Re-export config types
    pub use crate::config::{ConfigBuilder, ConfigLoader, ElementalConfig, LogLevel};

    // Re-export the attribute-store boundary
    pub use crate::store::{AttributeKey, AttributeStore, MemoryAttributeStore};

    // Re-export essential result type
    pub use crate::{ElementalError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Elemental operations
#[derive(Debug, thiserror::Error)]
pub enum ElementalError {
    /// An element id failed normalization (empty or whitespace-only)
    #[error("Invalid element id: {0}")]
    InvalidElementId(String),

    /// An id-resolving operation referenced an unregistered element
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// An attribute key failed validation
    #[error("Invalid attribute key: {0}")]
    InvalidAttributeKey(String),

    /// Attach/read was called before the attribute-store key was initialized.
    /// This is a caller error: call `Context::init_store` during host startup.
    #[error("Attribute store key not initialized; call Context::init_store first")]
    StoreNotInitialized,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LogError),

    /// Attribute store backend error
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
}

/// Result type for Elemental operations
pub type Result<T> = std::result::Result<T, ElementalError>;

/// Initialize Elemental with default configuration.
///
/// Installs logging and returns an empty [`elements::Context`] with neutral
/// as the default relation.
pub fn init_with_defaults() -> Result<elements::Context> {
    let config = config::ConfigBuilder::new().build()?;
    init(config)
}

/// Initialize Elemental with the provided configuration.
///
/// Installs logging (ignoring an already-installed subscriber), then builds a
/// [`elements::Context`] seeded with the configured elements and relations.
///
/// # Examples
///
/// ```rust
/// use elemental::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_element("fire")
///         .with_element("ice")
///         .with_relation("fire", "ice", Relation::Strong)
///         .build()?;
///
///     let context = init(config)?;
///     assert_eq!(context.relation_between("ice", "fire"), Relation::Weak);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub fn init(config: config::ElementalConfig) -> Result<elements::Context> {
    let _ = logging::init(&config.logging);

    elements::Context::from_config(&config)
}
