use async_trait::async_trait;
use chrono::NaiveDate;
use lawbook_core::models::{
    availability::WeeklyAvailability,
    booking::{Booking, BookingStatus, CreateBookingRequest},
    schedule::LawyerSchedule,
};
use mockall::mock;
use uuid::Uuid;

use crate::store::Store;

// Mock store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl Store for Store {
        async fn get_schedule(&self, lawyer_id: Uuid) -> eyre::Result<Option<LawyerSchedule>>;

        async fn upsert_schedule(
            &self,
            lawyer_id: Uuid,
            availability: WeeklyAvailability,
            password_hash: Option<String>,
            timezone: String,
        ) -> eyre::Result<LawyerSchedule>;

        async fn verify_password(&self, lawyer_id: Uuid, password: String) -> eyre::Result<bool>;

        async fn create_booking(&self, request: CreateBookingRequest) -> eyre::Result<Booking>;

        async fn get_booking(&self, id: Uuid) -> eyre::Result<Option<Booking>>;

        async fn list_bookings_for_user(&self, user_id: Uuid) -> eyre::Result<Vec<Booking>>;

        async fn list_bookings_for_lawyer(&self, lawyer_id: Uuid) -> eyre::Result<Vec<Booking>>;

        async fn list_active_bookings_on(
            &self,
            lawyer_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<Booking>>;

        async fn update_booking_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> eyre::Result<Booking>;
    }
}
