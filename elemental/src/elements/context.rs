//! Process context.
//!
//! A [`Context`] owns one [`ElementRegistry`] and one [`RelationTable`] and is
//! the single entry point consumers use. It is an explicitly constructed,
//! cloneable handle rather than a global singleton, so independent instances
//! can coexist in tests and in embedding hosts.
//!
//! A single `RwLock` guards both the registry and the table: the two-entry
//! relation write happens under one write guard, so no reader ever observes
//! only one direction of a relation updated.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

use super::element::Element;
use super::registry::ElementRegistry;
use super::relation::Relation;
use super::table::RelationTable;
use crate::config::ElementalConfig;
use crate::store::{AttributeKey, AttributeStore};
use crate::{ElementalError, Result};

#[derive(Debug, Default)]
struct State {
    registry: ElementRegistry,
    relations: RelationTable,
    element_key: Option<AttributeKey>,
}

/// The owning aggregate of one element registry and one relation table.
#[derive(Debug, Clone, Default)]
pub struct Context {
    state: Arc<RwLock<State>>,
    default_relation: Relation,
}

impl Context {
    /// Create an empty context with [`Relation::Neutral`] as the fallback for
    /// unspecified pairs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context with a custom fallback relation.
    pub fn with_default_relation(default_relation: Relation) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            default_relation,
        }
    }

    /// Build a context from configuration, registering seeded elements and
    /// applying seeded relations.
    pub fn from_config(config: &ElementalConfig) -> Result<Self> {
        let context = Self::with_default_relation(config.elements.default_relation);
        for seed in &config.elements.seed {
            let mut element = Element::new(&seed.id)?;
            if let Some(name) = &seed.display_name {
                element = element.with_display_name(name);
            }
            if !context.register(element) {
                warn!("duplicate element {} in config seed, ignored", seed.id);
            }
        }
        for seed in &config.elements.relations {
            context.set_relation_between(&seed.from, &seed.to, seed.relation)?;
        }
        debug!(
            "context built from config: {} elements, {} relation entries",
            context.element_count(),
            context.relation_count()
        );
        Ok(context)
    }

    // -------------------------
    // Elements
    // -------------------------

    /// Register an element; returns `false` if its id is already taken.
    pub fn register(&self, element: Element) -> bool {
        self.state.write().registry.register(element)
    }

    /// Look up an element by raw (case-insensitive) id.
    pub fn element(&self, id: impl AsRef<str>) -> Option<Element> {
        self.state.read().registry.get(id).cloned()
    }

    /// The first successfully registered element, if any.
    pub fn default_element(&self) -> Option<Element> {
        self.state.read().registry.default_element().cloned()
    }

    pub fn element_count(&self) -> usize {
        self.state.read().registry.len()
    }

    /// Snapshot of all registered elements, in no particular order.
    pub fn elements(&self) -> Vec<Element> {
        self.state.read().registry.iter().cloned().collect()
    }

    // -------------------------
    // Relations
    // -------------------------

    /// Store `relation` at (from, to) and its inverse at (to, from) as one
    /// atomic unit.
    ///
    /// The elements need not be registered; relations are keyed purely by
    /// element identity.
    pub fn set_relation(&self, from: &Element, to: &Element, relation: Relation) {
        self.state.write().relations.set(from, to, relation);
    }

    /// Like [`Context::set_relation`], resolving both endpoints from raw ids.
    ///
    /// Fails with [`ElementalError::InvalidElementId`] for an empty id and
    /// [`ElementalError::UnknownElement`] for an id that is not registered.
    pub fn set_relation_between(
        &self,
        from_id: impl AsRef<str>,
        to_id: impl AsRef<str>,
        relation: Relation,
    ) -> Result<()> {
        let mut state = self.state.write();
        let from = state
            .registry
            .get(&from_id)
            .cloned()
            .ok_or_else(|| ElementalError::UnknownElement(from_id.as_ref().to_string()))?;
        let to = state
            .registry
            .get(&to_id)
            .cloned()
            .ok_or_else(|| ElementalError::UnknownElement(to_id.as_ref().to_string()))?;
        state.relations.set(&from, &to, relation);
        Ok(())
    }

    /// The stored relation for the ordered pair, or `None` if unset.
    pub fn relation_opt(&self, from: &Element, to: &Element) -> Option<Relation> {
        self.state.read().relations.get(from, to)
    }

    /// The relation for the ordered pair, falling back to the context's
    /// default relation when unset.
    pub fn relation(&self, from: &Element, to: &Element) -> Relation {
        self.relation_or(from, to, self.default_relation)
    }

    /// Like [`Context::relation`] with an explicit fallback.
    pub fn relation_or(&self, from: &Element, to: &Element, fallback: Relation) -> Relation {
        self.state.read().relations.get_or_default(from, to, fallback)
    }

    /// Resolve both endpoints from raw ids and return their relation.
    ///
    /// This path is null-safe: an empty or unregistered id yields the
    /// default relation rather than an error.
    pub fn relation_between(&self, from_id: impl AsRef<str>, to_id: impl AsRef<str>) -> Relation {
        let state = self.state.read();
        match (state.registry.get(&from_id), state.registry.get(&to_id)) {
            (Some(from), Some(to)) => state
                .relations
                .get_or_default(from, to, self.default_relation),
            _ => self.default_relation,
        }
    }

    pub fn relation_count(&self) -> usize {
        self.state.read().relations.len()
    }

    /// The fallback relation returned for unspecified pairs.
    pub fn default_relation(&self) -> Relation {
        self.default_relation
    }

    // -------------------------
    // Attribute store wiring
    // -------------------------

    /// Initialize the attribute-store key.
    ///
    /// Must be called exactly once during host startup, before any
    /// [`Context::attach_element`] or [`Context::read_element`] call. A
    /// repeated call keeps the first key.
    pub fn init_store(&self, key: AttributeKey) {
        let mut state = self.state.write();
        match &state.element_key {
            Some(existing) => {
                warn!("attribute key already initialized as {existing}, ignoring {key}");
            }
            None => {
                debug!("attribute key initialized as {key}");
                state.element_key = Some(key);
            }
        }
    }

    fn element_key(&self) -> Result<AttributeKey> {
        self.state
            .read()
            .element_key
            .clone()
            .ok_or(ElementalError::StoreNotInitialized)
    }

    /// Persist an element's id on a host record via the attribute store.
    ///
    /// Only the normalized id string is written.
    pub async fn attach_element(
        &self,
        store: &dyn AttributeStore,
        container: &str,
        element: &Element,
    ) -> Result<()> {
        let key = self.element_key()?;
        store
            .attach(container, &key, element.id().as_str())
            .await?;
        debug!("attached element {} to container {}", element, container);
        Ok(())
    }

    /// Read an element back from a host record.
    ///
    /// Returns `None` when the record carries no element attribute or when
    /// the stored id is no longer registered.
    pub async fn read_element(
        &self,
        store: &dyn AttributeStore,
        container: &str,
    ) -> Result<Option<Element>> {
        let key = self.element_key()?;
        let Some(id) = store.read(container, &key).await? else {
            return Ok(None);
        };
        Ok(self.element(id))
    }
}
