//! The look-ahead window clients may book into.

use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{
    errors::{LawbookError, LawbookResult},
    models::{
        availability::{Weekday, WeeklyAvailability},
        slot::BookableDate,
    },
};

/// Number of days, today included, that can be booked.
pub const BOOKING_WINDOW_DAYS: u64 = 14;

/// `today` followed by the next 13 days, in order.
pub fn booking_window(today: NaiveDate) -> Vec<NaiveDate> {
    today
        .iter_days()
        .take(BOOKING_WINDOW_DAYS as usize)
        .collect()
}

/// The last bookable date for a window starting at `today`.
pub fn last_bookable_day(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(BOOKING_WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Rejects dates before `today` or past the end of the window.
pub fn ensure_in_window(date: NaiveDate, today: NaiveDate) -> LawbookResult<()> {
    let last = last_bookable_day(today);
    if date < today || date > last {
        return Err(LawbookError::Validation(format!(
            "Date {} is outside the booking window {} to {}",
            date, today, last
        )));
    }
    Ok(())
}

/// Today's date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Parses an IANA timezone name such as `Asia/Ho_Chi_Minh`.
pub fn parse_timezone(name: &str) -> LawbookResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| LawbookError::Validation(format!("Unknown timezone '{}'", name)))
}

/// The window annotated with each date's weekday and whether the lawyer
/// works that day.
pub fn bookable_dates(today: NaiveDate, availability: &WeeklyAvailability) -> Vec<BookableDate> {
    booking_window(today)
        .into_iter()
        .map(|date| {
            let day = Weekday::from(date.weekday());
            let active = availability
                .for_day(day)
                .is_some_and(|d| d.active && !d.slots.is_empty());
            BookableDate { date, day, active }
        })
        .collect()
}
