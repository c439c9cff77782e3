//! Seat and Layout View Models
//!
//! Seats are synthesized, never persisted: `<tableid>_seat_<index>` with a
//! zero-based index. The view types here are what the front end renders
//! after reconciliation.

use serde::{Deserialize, Serialize};

use super::guest::{Gender, GuestInfo};
use super::table::Side;

/// Reference to a seat slot, as submitted by placement operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRef {
    pub id: String,
    pub table_id: String,
    pub seat_number: u32,
}

impl SeatRef {
    pub fn same_seat(&self, other: &SeatRef) -> bool {
        self.id == other.id && self.table_id == other.table_id
    }
}

/// Move-guest payload: source and target seats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: SeatRef,
    pub to: SeatRef,
}

/// Guest display fields attached to an occupied seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatGuest {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub notes: String,
    pub accommodation: bool,
    pub relationship: String,
}

impl From<GuestInfo> for SeatGuest {
    fn from(info: GuestInfo) -> Self {
        Self {
            name: info.name,
            gender: info.gender,
            phone: info.phone,
            notes: info.notes,
            accommodation: info.accommodation,
            relationship: info.relationship,
        }
    }
}

/// One synthesized seat in the reconciled view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub table_id: String,
    /// 1-based position shown on the table card
    pub seat_number: u32,
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<SeatGuest>,
}

/// One table in the reconciled view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLayout {
    pub id: String,
    pub display_number: u32,
    pub side: Side,
    /// Nominal capacity (the configured default seat count)
    pub max_capacity: u32,
    /// max(nominal capacity, highest referenced seat number)
    pub extended_capacity: u32,
    pub current_count: u32,
    pub notes: String,
    pub seats: Vec<Seat>,
}
