use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::LawbookError, time::ClockTime};

/// Day of the week a lawyer can be booked on.
///
/// Serialised by lowercase English name. Parsing also accepts the short
/// English forms and the Vietnamese labels the mobile client sends
/// (`"Thứ 2"` through `"Thứ 7"`, `"Chủ Nhật"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday first, the order the availability editor lists days in.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = LawbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let day = match normalized.as_str() {
            "monday" | "mon" | "thứ 2" => Weekday::Monday,
            "tuesday" | "tue" | "thứ 3" => Weekday::Tuesday,
            "wednesday" | "wed" | "thứ 4" => Weekday::Wednesday,
            "thursday" | "thu" | "thứ 5" => Weekday::Thursday,
            "friday" | "fri" | "thứ 6" => Weekday::Friday,
            "saturday" | "sat" | "thứ 7" => Weekday::Saturday,
            "sunday" | "sun" | "chủ nhật" => Weekday::Sunday,
            _ => {
                return Err(LawbookError::Validation(format!("Unknown weekday '{}'", s)));
            }
        };
        Ok(day)
    }
}

impl TryFrom<String> for Weekday {
    type Error = LawbookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(value: Weekday) -> Self {
        value.as_str().to_string()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// A `start`-`end` window on a single day. Validated ranges have `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Parses both ends, e.g. `TimeRange::parse("08:00", "17:00")`.
    pub fn parse(start: &str, end: &str) -> Result<Self, LawbookError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Availability for one weekday: whether the lawyer takes bookings and in
/// which ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: Weekday,
    pub active: bool,
    #[serde(default)]
    pub slots: Vec<TimeRange>,
}

impl DayAvailability {
    pub fn inactive(day: Weekday) -> Self {
        Self {
            day,
            active: false,
            slots: Vec::new(),
        }
    }
}

/// A lawyer's weekly availability, one entry per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability(pub Vec<DayAvailability>);

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self(Weekday::ALL.into_iter().map(DayAvailability::inactive).collect())
    }
}

impl WeeklyAvailability {
    /// Range seeded when an empty day is switched on.
    pub const DEFAULT_DAY_RANGE: (ClockTime, ClockTime) =
        (ClockTime::on_the_hour(8), ClockTime::on_the_hour(17));
    /// Range appended by [`WeeklyAvailability::add_range`].
    pub const DEFAULT_NEW_RANGE: (ClockTime, ClockTime) =
        (ClockTime::on_the_hour(8), ClockTime::on_the_hour(9));

    pub fn days(&self) -> impl Iterator<Item = &DayAvailability> {
        self.0.iter()
    }

    pub fn for_day(&self, day: Weekday) -> Option<&DayAvailability> {
        self.0.iter().find(|d| d.day == day)
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayAvailability {
        let idx = match self.0.iter().position(|d| d.day == day) {
            Some(idx) => idx,
            None => {
                self.0.push(DayAvailability::inactive(day));
                self.0.len() - 1
            }
        };
        &mut self.0[idx]
    }

    /// Flips a day on or off. Switching on a day without ranges seeds it
    /// with `08:00-17:00`.
    pub fn toggle_day(&mut self, day: Weekday) {
        let entry = self.day_mut(day);
        entry.active = !entry.active;
        if entry.active && entry.slots.is_empty() {
            let (start, end) = Self::DEFAULT_DAY_RANGE;
            entry.slots.push(TimeRange::new(start, end));
        }
    }

    /// Appends an `08:00-09:00` range for the lawyer to adjust.
    pub fn add_range(&mut self, day: Weekday) {
        let (start, end) = Self::DEFAULT_NEW_RANGE;
        self.day_mut(day).slots.push(TimeRange::new(start, end));
    }

    /// Removes the range at `index`, returning it if it existed.
    pub fn remove_range(&mut self, day: Weekday, index: usize) -> Option<TimeRange> {
        let entry = self.day_mut(day);
        (index < entry.slots.len()).then(|| entry.slots.remove(index))
    }
}
