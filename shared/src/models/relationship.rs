//! Relationship Tag Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_u32;

/// Which host a relationship tag groups under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipCategory {
    Groom,
    Bride,
    GroomFamily,
    BrideFamily,
    Other,
}

impl Default for RelationshipCategory {
    fn default() -> Self {
        Self::Other
    }
}

/// Relationship tag row as persisted in `relationships.csv`
///
/// `value` is the globally unique key guests reference; `order` is a
/// display rank, rewritten to 1..N by the reorder operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub value: String,
    pub label: String,
    pub category: RelationshipCategory,
    #[serde(deserialize_with = "lenient_u32")]
    pub order: u32,
    #[serde(default)]
    pub timestamp: String,
}

/// Create relationship payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipCreate {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub category: RelationshipCategory,
}

/// Update relationship payload — `value` is immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipUpdate {
    pub label: Option<String>,
    pub category: Option<RelationshipCategory>,
    pub order: Option<u32>,
}

/// Reorder payload: the full tag sequence in its new display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipReorder {
    pub relationships: Vec<RelationshipRecord>,
}
