use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use lawbook_core::{
    errors::LawbookError,
    models::booking::{BookingStatus, CreateBookingRequest},
};
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

const BOOKING_COLUMNS: &str = "id, user_id, lawyer_id, date, start_time, end_time, price, \
    booking_type, address_meeting, actual_phone, documents, note, status, created_at";

/// Inserts a pending booking. A concurrent booking of the same slot trips
/// the partial unique index and comes back as `LawbookError::Conflict`.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    request: &CreateBookingRequest,
) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let query = format!(
        r#"
        INSERT INTO bookings (id, user_id, lawyer_id, date, start_time, end_time, price,
            booking_type, address_meeting, actual_phone, documents, note, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING {}
        "#,
        BOOKING_COLUMNS
    );

    let result = sqlx::query_as::<_, DbBooking>(&query)
        .bind(id)
        .bind(request.user_id)
        .bind(request.lawyer_id)
        .bind(request.date)
        .bind(request.time_slot.start.to_string())
        .bind(request.time_slot.end.to_string())
        .bind(request.price)
        .bind(request.booking_type.as_str())
        .bind(request.address_meeting.as_deref())
        .bind(&request.actual_phone)
        .bind(Json(&request.documents))
        .bind(request.note.as_deref())
        .bind(BookingStatus::Pending.as_str())
        .bind(now)
        .fetch_one(pool)
        .await;

    match result {
        Ok(booking) => {
            tracing::debug!("Booking created: id={}, lawyer_id={}", id, request.lawyer_id);
            Ok(booking)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(LawbookError::Conflict(
            format!(
                "The slot {} on {} is already booked",
                request.time_slot, request.date
            ),
        )
        .into()),
        Err(e) => Err(e.into()),
    }
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let query = format!("SELECT {} FROM bookings WHERE id = $1", BOOKING_COLUMNS);
    let booking = sqlx::query_as::<_, DbBooking>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(booking)
}

pub async fn list_bookings_for_user(pool: &Pool<Postgres>, user_id: Uuid) -> Result<Vec<DbBooking>> {
    let query = format!(
        "SELECT {} FROM bookings WHERE user_id = $1 ORDER BY date DESC, start_time DESC",
        BOOKING_COLUMNS
    );
    let bookings = sqlx::query_as::<_, DbBooking>(&query)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(bookings)
}

pub async fn list_bookings_for_lawyer(
    pool: &Pool<Postgres>,
    lawyer_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let query = format!(
        "SELECT {} FROM bookings WHERE lawyer_id = $1 ORDER BY date ASC, start_time ASC",
        BOOKING_COLUMNS
    );
    let bookings = sqlx::query_as::<_, DbBooking>(&query)
        .bind(lawyer_id)
        .fetch_all(pool)
        .await?;

    Ok(bookings)
}

/// Non-cancelled bookings a lawyer holds on `date`.
pub async fn list_active_bookings_on(
    pool: &Pool<Postgres>,
    lawyer_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let query = format!(
        r#"
        SELECT {} FROM bookings
        WHERE lawyer_id = $1 AND date = $2 AND status <> $3
        ORDER BY start_time ASC
        "#,
        BOOKING_COLUMNS
    );
    let bookings = sqlx::query_as::<_, DbBooking>(&query)
        .bind(lawyer_id)
        .bind(date)
        .bind(BookingStatus::Cancelled.as_str())
        .fetch_all(pool)
        .await?;

    Ok(bookings)
}

pub async fn update_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: BookingStatus,
) -> Result<DbBooking> {
    let query = format!(
        "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {}",
        BOOKING_COLUMNS
    );
    let booking = sqlx::query_as::<_, DbBooking>(&query)
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| LawbookError::NotFound(format!("Booking with ID {} not found", id)))?;

    tracing::debug!("Booking {} is now {}", id, status);
    Ok(booking)
}
