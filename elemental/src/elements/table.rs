//! Pairwise relation storage.
//!
//! The table is keyed by an ordered (from, to) pair of element identities.
//! Whenever an entry exists at (from, to) with relation R, an entry exists at
//! (to, from) with `R.inverse()`; the two entries are written and replaced
//! together, never one side alone. An absent pair means "unspecified", which
//! is distinct from an explicit neutral entry.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::element::{Element, ElementId};
use super::relation::Relation;

#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    relations: HashMap<(ElementId, ElementId), Relation>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `relation` at (from, to) and its inverse at (to, from),
    /// replacing any prior entries at both positions.
    ///
    /// Self-pairs are legal: both writes land on the same key, so the second
    /// one (the inverse) is what remains. For a symmetric relation the two
    /// are identical; an asymmetric self-relation is a caller error, stored
    /// as supplied but flagged with a warning.
    pub fn set(&mut self, from: &Element, to: &Element, relation: Relation) {
        if from == to && !relation.is_symmetric() {
            warn!(
                "asymmetric relation {} set from {} to itself; the inverse overwrites it",
                relation, from
            );
        }
        debug!(
            "relation {} -> {} set to {} (reverse {})",
            from,
            to,
            relation,
            relation.inverse()
        );
        self.relations
            .insert((from.id().clone(), to.id().clone()), relation);
        self.relations
            .insert((to.id().clone(), from.id().clone()), relation.inverse());
    }

    /// The relation stored for the ordered pair, or `None` if unset.
    pub fn get(&self, from: &Element, to: &Element) -> Option<Relation> {
        self.relations
            .get(&(from.id().clone(), to.id().clone()))
            .copied()
    }

    /// Like [`RelationTable::get`], substituting `fallback` for an empty result.
    pub fn get_or_default(&self, from: &Element, to: &Element, fallback: Relation) -> Relation {
        self.get(from, to).unwrap_or(fallback)
    }

    pub fn contains(&self, from: &Element, to: &Element) -> bool {
        self.relations
            .contains_key(&(from.id().clone(), to.id().clone()))
    }

    /// Number of directional entries (each `set` accounts for two, or one for
    /// a self-pair).
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str) -> Element {
        Element::new(id).unwrap()
    }

    #[test]
    fn test_set_stores_both_directions() {
        let (fire, water) = (element("fire"), element("water"));
        let mut table = RelationTable::new();

        table.set(&fire, &water, Relation::Weak);
        assert_eq!(table.get(&fire, &water), Some(Relation::Weak));
        assert_eq!(table.get(&water, &fire), Some(Relation::Strong));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_set_replaces_both_directions() {
        let (fire, water) = (element("fire"), element("water"));
        let mut table = RelationTable::new();

        table.set(&fire, &water, Relation::Strong);
        table.set(&fire, &water, Relation::Neutral);
        assert_eq!(table.get(&fire, &water), Some(Relation::Neutral));
        assert_eq!(table.get(&water, &fire), Some(Relation::Neutral));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unset_pair_is_none() {
        let (fire, water) = (element("fire"), element("water"));
        let table = RelationTable::new();

        assert_eq!(table.get(&fire, &water), None);
        assert_eq!(
            table.get_or_default(&fire, &water, Relation::Neutral),
            Relation::Neutral
        );
    }

    #[test]
    fn test_symmetric_self_pair() {
        let fire = element("fire");
        let mut table = RelationTable::new();

        table.set(&fire, &fire, Relation::MutualStrong);
        assert_eq!(table.get(&fire, &fire), Some(Relation::MutualStrong));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_asymmetric_self_pair_keeps_last_write() {
        let fire = element("fire");
        let mut table = RelationTable::new();

        // Both writes land on the same key; the inverse is written second.
        table.set(&fire, &fire, Relation::Strong);
        assert_eq!(table.get(&fire, &fire), Some(Relation::Weak));
    }
}
