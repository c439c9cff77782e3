//! Shared types for the banquet seating system
//!
//! Record types mirror the persisted CSV row shape, payload types mirror
//! the JSON bodies the front end submits, and view types mirror the
//! reconciled table/seat structure it renders.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
