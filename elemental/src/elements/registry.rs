//! Element registry.
//!
//! Owns the mapping from normalized id to [`Element`] and tracks the default
//! element. Registration is first-wins: a later element with an already-known
//! id is rejected without touching existing state. There is no removal or
//! update-in-place; a registered element's identity is fixed for the
//! registry's lifetime.

use std::collections::HashMap;
use tracing::debug;

use super::element::{Element, ElementId};

#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: HashMap<ElementId, Element>,
    default_id: Option<ElementId>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element.
    ///
    /// Returns `false` and leaves state unchanged when the normalized id is
    /// already registered. The first successfully registered element becomes
    /// the default element and is never reassigned afterwards.
    pub fn register(&mut self, element: Element) -> bool {
        let id = element.id().clone();
        if self.elements.contains_key(&id) {
            debug!("element {} already registered, keeping existing entry", id);
            return false;
        }
        debug!("registered element {}", id);
        self.elements.insert(id.clone(), element);
        if self.default_id.is_none() {
            self.default_id = Some(id);
        }
        true
    }

    /// Look up an element by raw id.
    ///
    /// The id is normalized before lookup; an empty or unknown id yields
    /// `None`, never an error.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Element> {
        let id = ElementId::new(id).ok()?;
        self.elements.get(&id)
    }

    /// Look up an element by its already-normalized id.
    pub fn get_by_id(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// The first successfully registered element, if any.
    pub fn default_element(&self) -> Option<&Element> {
        self.default_id
            .as_ref()
            .and_then(|id| self.elements.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all registered elements, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ElementRegistry::new();
        assert!(registry.register(Element::new("fire").unwrap()));
        assert!(registry.get("FIRE").is_some());
        assert!(registry.get("Fire").is_some());
        assert!(registry.get("water").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ElementRegistry::new();
        let original = Element::new("fire").unwrap().with_display_name("Flame");
        assert!(registry.register(original));
        assert!(!registry.register(Element::new("FIRE").unwrap().with_display_name("Blaze")));

        // The first registration wins, both as stored value and as default.
        let stored = registry.get("fire").unwrap();
        assert_eq!(stored.display_name(), "Flame");
        assert_eq!(registry.default_element().unwrap().display_name(), "Flame");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_is_first_registered() {
        let mut registry = ElementRegistry::new();
        assert!(registry.default_element().is_none());

        registry.register(Element::new("earth").unwrap());
        assert_eq!(registry.default_element().unwrap().id().as_str(), "EARTH");

        registry.register(Element::new("wind").unwrap());
        assert_eq!(registry.default_element().unwrap().id().as_str(), "EARTH");
    }

    #[test]
    fn test_empty_id_lookup_is_none() {
        let mut registry = ElementRegistry::new();
        registry.register(Element::new("fire").unwrap());
        assert!(registry.get("").is_none());
        assert!(registry.get("   ").is_none());
    }
}
