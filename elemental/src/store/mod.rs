//! Attribute-store boundary.
//!
//! The core never persists its own state; hosts that want an element attached
//! to one of their records (an item, a player, a save slot) do so through the
//! [`AttributeStore`] capability. Only the normalized element id string ever
//! crosses this boundary, and reads resolve back through the registry, so the
//! core stays free of any host-framework dependency.

mod memory;

pub use memory::MemoryAttributeStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ElementalError, Result};

/// Error type for attribute-store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("attribute store backend error: {0}")]
    Backend(String),

    /// The stored value is not a valid element id string.
    #[error("corrupt attribute value for key {key}: {reason}")]
    CorruptValue { key: String, reason: String },
}

/// Namespaced key under which an element id is stored on a host record.
///
/// Constructed exactly once per context during host startup, before any
/// attach/read call (see [`crate::elements::Context::init_store`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey {
    namespace: String,
    name: String,
}

impl AttributeKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (namespace, name) = (namespace.into(), name.into());
        if namespace.trim().is_empty() || name.trim().is_empty() {
            return Err(ElementalError::InvalidAttributeKey(
                "attribute key namespace and name cannot be empty".to_string(),
            ));
        }
        Ok(Self { namespace, name })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// Capability for persisting element id strings on host-owned records.
///
/// `container` identifies the host record (an item id, a player uuid, ...);
/// its meaning belongs entirely to the implementation.
#[async_trait]
pub trait AttributeStore: Send + Sync + fmt::Debug {
    /// Write `value` under `key` on the given container, replacing any prior
    /// value.
    async fn attach(
        &self,
        container: &str,
        key: &AttributeKey,
        value: &str,
    ) -> std::result::Result<(), StoreError>;

    /// Read the value stored under `key` on the given container, or `None`
    /// if the container has no such attribute.
    async fn read(
        &self,
        container: &str,
        key: &AttributeKey,
    ) -> std::result::Result<Option<String>, StoreError>;
}
