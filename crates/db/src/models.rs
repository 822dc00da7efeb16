use chrono::{DateTime, NaiveDate, Utc};
use eyre::{Result, WrapErr};
use lawbook_core::models::{
    availability::{TimeRange, WeeklyAvailability},
    booking::Booking,
    schedule::LawyerSchedule,
};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub lawyer_id: Uuid,
    pub availability: Json<WeeklyAvailability>,
    pub password_hash: Option<String>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbSchedule> for LawyerSchedule {
    fn from(row: DbSchedule) -> Self {
        Self {
            lawyer_id: row.lawyer_id,
            availability: row.availability.0,
            password_hash: row.password_hash,
            timezone: row.timezone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A `bookings` row. Times, type and status are stored as text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lawyer_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub price: i64,
    pub booking_type: String,
    pub address_meeting: Option<String>,
    pub actual_phone: String,
    pub documents: Json<Vec<String>>,
    pub note: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    pub fn into_booking(self) -> Result<Booking> {
        let time_slot = TimeRange::parse(&self.start_time, &self.end_time)
            .wrap_err_with(|| format!("Corrupt time slot on booking {}", self.id))?;

        Ok(Booking {
            id: self.id,
            user_id: self.user_id,
            lawyer_id: self.lawyer_id,
            date: self.date,
            time_slot,
            price: self.price,
            booking_type: self.booking_type.parse()?,
            address_meeting: self.address_meeting,
            actual_phone: self.actual_phone,
            documents: self.documents.0,
            note: self.note,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

pub(crate) fn into_bookings(rows: Vec<DbBooking>) -> Result<Vec<Booking>> {
    rows.into_iter().map(DbBooking::into_booking).collect()
}
