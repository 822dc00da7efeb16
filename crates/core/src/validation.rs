//! Rules a weekly availability must satisfy before it is saved.
//!
//! Slot generation trusts its input, so every overlap and ordering check
//! happens here, at the editing step.

use std::collections::HashSet;

use crate::{
    errors::{LawbookError, LawbookResult},
    models::availability::WeeklyAvailability,
};

/// Checks a weekly availability and reports the first violation.
///
/// Inactive days are not inspected. An active day needs at least one range,
/// every range needs `start < end`, and no two ranges of the same day may
/// overlap. Each weekday may appear only once.
pub fn validate_availability(availability: &WeeklyAvailability) -> LawbookResult<()> {
    let mut seen = HashSet::new();
    for day in availability.days() {
        if !seen.insert(day.day) {
            return Err(LawbookError::Validation(format!(
                "{} is listed more than once",
                day.day
            )));
        }

        if !day.active {
            continue;
        }

        if day.slots.is_empty() {
            return Err(LawbookError::Validation(format!(
                "{} is active but has no time ranges",
                day.day
            )));
        }

        for (i, range) in day.slots.iter().enumerate() {
            if range.start >= range.end {
                return Err(LawbookError::Validation(format!(
                    "{}: start time ({}) must be before end time ({})",
                    day.day, range.start, range.end
                )));
            }

            if let Some(other) = day.slots[i + 1..].iter().find(|o| range.overlaps(o)) {
                return Err(LawbookError::Validation(format!(
                    "{}: time ranges {} and {} overlap",
                    day.day, range, other
                )));
            }
        }
    }
    Ok(())
}
