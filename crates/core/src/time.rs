//! Wall-clock `HH:MM` times used in availability ranges and slots.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LawbookError;

const MINUTES_PER_HOUR: u16 = 60;
const MAX_MINUTES: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day with minute precision, written `HH:MM`.
///
/// `24:00` is accepted as the end-of-day marker so a range can close at
/// midnight; no other time past `23:59` parses.
///
/// # Example
///
/// ```
/// use lawbook_core::time::ClockTime;
///
/// let t: ClockTime = "09:30".parse().unwrap();
/// assert_eq!(t.hour(), 9);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.to_string(), "09:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime { minutes: MAX_MINUTES };

    /// Builds a time from an hour and minute, rejecting anything outside
    /// `00:00..=24:00`.
    pub fn new(hour: u16, minute: u16) -> Result<Self, LawbookError> {
        if minute >= MINUTES_PER_HOUR {
            return Err(LawbookError::Validation(format!(
                "Minute must be between 0 and 59, got {}",
                minute
            )));
        }
        let minutes = hour
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(minute))
            .filter(|m| *m <= MAX_MINUTES)
            .ok_or_else(|| {
                LawbookError::Validation(format!(
                    "Time {:02}:{:02} is outside 00:00-24:00",
                    hour, minute
                ))
            })?;
        Ok(Self { minutes })
    }

    /// The full hour `hour:00`. Hours past 24 saturate at the end of the day.
    pub const fn on_the_hour(hour: u16) -> Self {
        let minutes = hour.saturating_mul(MINUTES_PER_HOUR);
        Self {
            minutes: if minutes > MAX_MINUTES { MAX_MINUTES } else { minutes },
        }
    }

    pub const fn hour(self) -> u16 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub const fn minute(self) -> u16 {
        self.minutes % MINUTES_PER_HOUR
    }

    pub const fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = LawbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LawbookError::Validation(format!("Invalid time '{}', expected HH:MM", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_field = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_field(hour, 2) || minute.len() != 2 || !is_field(minute, 2) {
            return Err(invalid());
        }

        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = LawbookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
