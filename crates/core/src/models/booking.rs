use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::LawbookError, models::availability::TimeRange};

/// Fee charged when the request does not carry one.
pub const DEFAULT_PRICE: i64 = 2000;

/// Longest contact phone the bookings table stores.
pub const MAX_PHONE_LEN: usize = 32;

/// Uploads a client may attach to one booking.
pub const MAX_DOCUMENTS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    /// Meeting at the lawyer's office.
    #[default]
    Office,
    /// Lawyer visits the client's address.
    Home,
}

impl BookingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            BookingType::Office => "office",
            BookingType::Home => "home",
        }
    }
}

impl FromStr for BookingType {
    type Err = LawbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(BookingType::Office),
            "home" => Ok(BookingType::Home),
            other => Err(LawbookError::Validation(format!("Unknown booking type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the booking still holds its slot.
    pub const fn is_active(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = LawbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(LawbookError::Validation(format!("Unknown booking status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lawyer_id: Uuid,
    pub date: NaiveDate,
    pub time_slot: TimeRange,
    pub price: i64,
    pub booking_type: BookingType,
    pub address_meeting: Option<String>,
    pub actual_phone: String,
    pub documents: Vec<String>,
    pub note: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

fn default_price() -> i64 {
    DEFAULT_PRICE
}

/// Booking payload sent by the client. Documents are URLs of files the
/// client already uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub lawyer_id: Uuid,
    pub date: NaiveDate,
    pub time_slot: TimeRange,
    #[serde(default = "default_price")]
    pub price: i64,
    #[serde(default)]
    pub booking_type: BookingType,
    pub address_meeting: Option<String>,
    pub actual_phone: String,
    #[serde(default)]
    pub documents: Vec<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusResponse {
    pub id: Uuid,
    pub status: BookingStatus,
}

/// Body of the lawyer-side status changes. The password is only needed when
/// the lawyer protected their schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingActionRequest {
    #[serde(default)]
    pub password: Option<String>,
}
