//! Element identity types.
//!
//! An element is identified by a case-insensitive string id. The id is
//! normalized once, at construction time, and the normalized form is the sole
//! equality and hash key; attributes such as the display name or metadata
//! never participate in identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{ElementalError, Result};

/// Normalized element identifier.
///
/// Ids are case-folded to uppercase when constructed ("fire", "Fire" and
/// "FIRE" all name the same element). Construction rejects empty or
/// whitespace-only input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Normalize `id` into a canonical element identifier.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ElementalError::InvalidElementId(
                "element id cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// The canonical (uppercase) form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One category in the relation system (a damage type, a faction, ...).
///
/// Two elements are equal iff their normalized ids are equal, regardless of
/// display name or metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    metadata: HashMap<String, serde_json::Value>,
}

impl Element {
    /// Create a new element from a raw id.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            id: ElementId::new(id)?,
            display_name: None,
            created_at: Utc::now(),
            metadata: HashMap::new(),
        })
    }

    /// Set a human-readable display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Attach application-specific metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Display name, falling back to the canonical id.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
