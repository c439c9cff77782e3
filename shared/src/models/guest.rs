//! Guest Record Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_u32, yes_no};

/// Guest gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Guest row as persisted in `guests.csv` (宾客记录)
///
/// Field order matches the CSV header order; the identity key is
/// (`tableid`, `seatid`) — at most one active row per seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "yes_no")]
    pub accommodation: bool,
    pub relationship: String,
    #[serde(rename = "tableid")]
    pub table_id: String,
    #[serde(rename = "seatid")]
    pub seat_id: String,
    #[serde(rename = "seatnumber", deserialize_with = "lenient_u32")]
    pub seat_number: u32,
    #[serde(default)]
    pub timestamp: String,
}

/// Guest display fields as submitted from the registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub accommodation: bool,
    pub relationship: String,
}

impl GuestRecord {
    /// Display fields of this row, without the seat placement.
    pub fn info(&self) -> GuestInfo {
        GuestInfo {
            name: self.name.clone(),
            gender: self.gender,
            phone: self.phone.clone(),
            notes: self.notes.clone(),
            accommodation: self.accommodation,
            relationship: self.relationship.clone(),
        }
    }
}
