//! # Availability Handlers
//!
//! Read-only views clients use to pick a booking time:
//!
//! 1. the 14-day look-ahead window, each date flagged by whether the lawyer
//!    works that weekday;
//! 2. the hourly slots of one date, derived from the lawyer's weekly
//!    availability, with slots already held by a booking marked unavailable.
//!
//! Slots are derived on every request and never stored.

use axum::{
    extract::State,
    Json,
};
use chrono::NaiveDate;
use lawbook_core::{
    errors::LawbookError,
    models::{
        availability::WeeklyAvailability,
        response::ApiResponse,
        slot::{BookableDate, SlotListResponse},
    },
    slots::{derive_slots_for_date, mark_booked},
    window::{bookable_dates, ensure_in_window},
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    extractors::{PathParams, QueryParams},
    middleware::error_handling::AppError,
    ApiState,
};

/// Query parameters for the slot listing endpoint
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Date to list, `YYYY-MM-DD`
    pub date: String,
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, LawbookError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LawbookError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// `GET /api/schedule/:lawyer_id/dates`
#[axum::debug_handler]
pub async fn list_dates(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<Vec<BookableDate>>>, AppError> {
    let schedule = state.store.get_schedule(lawyer_id).await?;
    let today = state.today_for(schedule.as_ref());
    let availability = schedule.map(|s| s.availability).unwrap_or_default();

    Ok(Json(ApiResponse::ok(
        "Booking window loaded",
        bookable_dates(today, &availability),
    )))
}

/// `GET /api/schedule/:lawyer_id/slots?date=YYYY-MM-DD`
///
/// # Errors
///
/// * `LawbookError::Validation` - malformed date or a date outside the window
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<SlotQuery>,
) -> Result<Json<ApiResponse<SlotListResponse>>, AppError> {
    let date = parse_date(&query.date)?;

    let schedule = state.store.get_schedule(lawyer_id).await?;
    ensure_in_window(date, state.today_for(schedule.as_ref()))?;

    let availability: WeeklyAvailability = schedule.map(|s| s.availability).unwrap_or_default();
    let mut slots = derive_slots_for_date(date, &availability);
    if !slots.is_empty() {
        let bookings = state.store.list_active_bookings_on(lawyer_id, date).await?;
        mark_booked(&mut slots, date, &bookings);
    }

    tracing::debug!(
        "Derived {} slots for lawyer {} on {}",
        slots.len(),
        lawyer_id,
        date
    );

    let response = SlotListResponse {
        lawyer_id,
        date,
        slots,
    };
    Ok(Json(ApiResponse::ok("Slots loaded", response)))
}
