//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! placement and management handlers.

use shared::models::{GuestInfo, SeatRef};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names, relationship labels
pub const MAX_NAME_LEN: usize = 100;

/// Notes fields (guest notes, table notes)
pub const MAX_NOTE_LEN: usize = 500;

/// Relationship tag values (machine keys)
pub const MAX_VALUE_LEN: usize = 64;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional/free-text field against the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a phone number: exactly `expected_len` ASCII digits.
pub fn validate_phone(phone: &str, expected_len: usize) -> Result<(), AppError> {
    if phone.len() != expected_len || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "phone must be exactly {expected_len} digits"
        )));
    }
    Ok(())
}

/// Validate the submitted guest fields.
///
/// The relationship value is deliberately not checked against the tag
/// taxonomy: deleting a tag leaves referencing guests in place, so an
/// unknown value is an orphan, not an error.
pub fn validate_guest(guest: &GuestInfo, phone_len: usize) -> Result<(), AppError> {
    validate_required_text(&guest.name, "name", MAX_NAME_LEN)?;
    validate_phone(&guest.phone, phone_len)?;
    validate_text_len(&guest.notes, "notes", MAX_NOTE_LEN)?;
    validate_required_text(&guest.relationship, "relationship", MAX_VALUE_LEN)?;
    Ok(())
}

/// Validate a seat reference: non-empty ids, seat number in range.
pub fn validate_seat(seat: &SeatRef, max_seats: u32) -> Result<(), AppError> {
    validate_required_text(&seat.id, "seat id", MAX_VALUE_LEN)?;
    validate_required_text(&seat.table_id, "table id", MAX_VALUE_LEN)?;
    if seat.seat_number < 1 || seat.seat_number > max_seats {
        return Err(AppError::validation(format!(
            "seat number must be between 1 and {max_seats}"
        )));
    }
    Ok(())
}
