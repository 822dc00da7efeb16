use serde::{Deserialize, Serialize};

use crate::time::ClockTime;

/// A one-hour bookable slot derived for a specific date.
///
/// Slots are recomputed on every request and never stored. `id` is
/// `YYYY-MM-DD-HH:MM` and only identifies the slot within one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSlot {
    pub id: String,
    /// Display label, `HH:MM - HH:MM`.
    pub time: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub lawyer_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    pub slots: Vec<GeneratedSlot>,
}

/// One entry of the look-ahead date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookableDate {
    pub date: chrono::NaiveDate,
    pub day: crate::models::availability::Weekday,
    pub active: bool,
}
