//! In-memory attribute store.
//!
//! Backend for tests and embedding hosts that do not bring their own
//! persistence. Values live in a process-local map and are lost on drop.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{AttributeKey, AttributeStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryAttributeStore {
    entries: RwLock<HashMap<(String, String), String>>,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl AttributeStore for MemoryAttributeStore {
    async fn attach(
        &self,
        container: &str,
        key: &AttributeKey,
        value: &str,
    ) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert((container.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn read(
        &self,
        container: &str,
        key: &AttributeKey,
    ) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .read()
            .get(&(container.to_string(), key.to_string()))
            .cloned())
    }
}
