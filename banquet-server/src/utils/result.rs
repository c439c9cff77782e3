//! Unified Result Types

use crate::utils::AppError;

/// Application-level Result type
///
/// Used in HTTP handlers and the seating domain logic
pub type AppResult<T> = Result<T, AppError>;
