//! Table Record Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_u32;

/// Venue side a table belongs to (左侧 / 右侧)
///
/// `Left` sorts before `Right`; display numbers restart per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Table row as persisted in `tables.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    #[serde(rename = "tableid")]
    pub table_id: String,
    #[serde(rename = "displaynumber", deserialize_with = "lenient_u32")]
    pub display_number: u32,
    pub side: Side,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Create table payload
///
/// `display_number` may be omitted; the server then assigns the next
/// free number on the requested side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    #[serde(default)]
    pub display_number: Option<u32>,
    pub side: Side,
    #[serde(default)]
    pub notes: String,
}

/// Update table notes payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableNotesUpdate {
    #[serde(default)]
    pub notes: String,
}
