//! Hourly slot derivation from weekly availability.
//!
//! Each range of the selected weekday is cut into consecutive one-hour slots.
//! Walking starts from the hour the range starts in and stops at the last
//! full hour before the range ends, so a trailing partial hour is dropped.

use chrono::{Datelike, NaiveDate};

use crate::{
    models::{
        availability::{DayAvailability, TimeRange, WeeklyAvailability},
        booking::Booking,
        slot::GeneratedSlot,
    },
    time::ClockTime,
};

const HOURS_PER_DAY: u16 = 24;

/// Derives the bookable one-hour slots of `day` for `date`.
///
/// Returns an empty list when the day is inactive or has no ranges. Slots
/// come out in range order and are all marked available.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lawbook_core::models::availability::{DayAvailability, TimeRange, Weekday};
/// use lawbook_core::slots::derive_slots;
///
/// let day = DayAvailability {
///     day: Weekday::Monday,
///     active: true,
///     slots: vec![TimeRange::parse("08:00", "09:30").unwrap()],
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let slots = derive_slots(date, &day);
/// assert_eq!(slots.len(), 1);
/// assert_eq!(slots[0].time, "08:00 - 09:00");
/// ```
pub fn derive_slots(date: NaiveDate, day: &DayAvailability) -> Vec<GeneratedSlot> {
    if !day.active {
        return Vec::new();
    }

    let date_key = date.format("%Y-%m-%d").to_string();
    day.slots
        .iter()
        .flat_map(hourly_ranges)
        .map(|range| GeneratedSlot {
            id: format!("{}-{}", date_key, range.start),
            time: range.to_string(),
            start: range.start,
            end: range.end,
            available: true,
        })
        .collect()
}

/// Looks up the weekday of `date` and derives its slots. A weekday missing
/// from the availability yields no slots.
pub fn derive_slots_for_date(date: NaiveDate, availability: &WeeklyAvailability) -> Vec<GeneratedSlot> {
    availability
        .for_day(date.weekday().into())
        .map(|day| derive_slots(date, day))
        .unwrap_or_default()
}

/// Marks slots taken by an active booking on `date` as unavailable.
pub fn mark_booked(slots: &mut [GeneratedSlot], date: NaiveDate, bookings: &[Booking]) {
    let taken: Vec<&TimeRange> = bookings
        .iter()
        .filter(|b| b.date == date && b.status.is_active())
        .map(|b| &b.time_slot)
        .collect();

    for slot in slots.iter_mut() {
        let range = TimeRange::new(slot.start, slot.end);
        if taken.iter().any(|t| t.overlaps(&range)) {
            slot.available = false;
        }
    }
}

fn hourly_ranges(range: &TimeRange) -> Vec<TimeRange> {
    let mut hour = range.start.hour();

    let mut out = Vec::new();
    while hour < HOURS_PER_DAY {
        let end = ClockTime::on_the_hour(hour + 1);
        if end > range.end {
            break;
        }
        out.push(TimeRange::new(ClockTime::on_the_hour(hour), end));
        hour += 1;
    }
    out
}
