//! The persistence seam the API depends on.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use lawbook_core::models::{
    availability::WeeklyAvailability,
    booking::{Booking, BookingStatus, CreateBookingRequest},
    schedule::LawyerSchedule,
};
use uuid::Uuid;

use crate::{
    models::into_bookings,
    repositories::{booking, schedule},
    DbPool,
};

/// Storage for lawyer schedules and bookings.
///
/// Domain failures (a missing row, a double booking) are returned as a
/// [`lawbook_core::errors::LawbookError`] inside the `eyre::Report` so callers
/// can recover the kind with `downcast`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn get_schedule(&self, lawyer_id: Uuid) -> Result<Option<LawyerSchedule>>;

    async fn upsert_schedule(
        &self,
        lawyer_id: Uuid,
        availability: WeeklyAvailability,
        password_hash: Option<String>,
        timezone: String,
    ) -> Result<LawyerSchedule>;

    async fn verify_password(&self, lawyer_id: Uuid, password: String) -> Result<bool>;

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;

    async fn list_bookings_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>>;

    async fn list_bookings_for_lawyer(&self, lawyer_id: Uuid) -> Result<Vec<Booking>>;

    async fn list_active_bookings_on(&self, lawyer_id: Uuid, date: NaiveDate) -> Result<Vec<Booking>>;

    async fn update_booking_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking>;
}

/// [`Store`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn get_schedule(&self, lawyer_id: Uuid) -> Result<Option<LawyerSchedule>> {
        let row = schedule::get_schedule_by_lawyer_id(&self.pool, lawyer_id).await?;
        Ok(row.map(Into::into))
    }

    async fn upsert_schedule(
        &self,
        lawyer_id: Uuid,
        availability: WeeklyAvailability,
        password_hash: Option<String>,
        timezone: String,
    ) -> Result<LawyerSchedule> {
        let row = schedule::upsert_schedule(
            &self.pool,
            lawyer_id,
            &availability,
            password_hash.as_deref(),
            &timezone,
        )
        .await?;
        Ok(row.into())
    }

    async fn verify_password(&self, lawyer_id: Uuid, password: String) -> Result<bool> {
        schedule::verify_password(&self.pool, lawyer_id, &password).await
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking> {
        booking::create_booking(&self.pool, &request).await?.into_booking()
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        booking::get_booking_by_id(&self.pool, id)
            .await?
            .map(|row| row.into_booking())
            .transpose()
    }

    async fn list_bookings_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        into_bookings(booking::list_bookings_for_user(&self.pool, user_id).await?)
    }

    async fn list_bookings_for_lawyer(&self, lawyer_id: Uuid) -> Result<Vec<Booking>> {
        into_bookings(booking::list_bookings_for_lawyer(&self.pool, lawyer_id).await?)
    }

    async fn list_active_bookings_on(&self, lawyer_id: Uuid, date: NaiveDate) -> Result<Vec<Booking>> {
        into_bookings(booking::list_active_bookings_on(&self.pool, lawyer_id, date).await?)
    }

    async fn update_booking_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking> {
        booking::update_booking_status(&self.pool, id, status)
            .await?
            .into_booking()
    }
}
