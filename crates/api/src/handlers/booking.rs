use axum::{extract::State, Json};
use lawbook_core::{
    booking::{cancel, complete, confirm, validate_booking},
    errors::{LawbookError, LawbookResult},
    models::{
        booking::{
            Booking, BookingActionRequest, BookingStatus, BookingStatusResponse,
            CreateBookingRequest,
        },
        response::ApiResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    extractors::{JsonBody, PathParams, QueryParams},
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub user_id: Uuid,
}

/// `POST /api/booking/create`
///
/// The requested slot must be one the lawyer offers on that date, inside the
/// booking window, and not already held by another booking.
///
/// # Errors
///
/// * `LawbookError::NotFound` - the lawyer has no schedule
/// * `LawbookError::Validation` - see [`validate_booking`]
/// * `LawbookError::Conflict` - the slot is taken
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    JsonBody(payload): JsonBody<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let schedule = state
        .store
        .get_schedule(payload.lawyer_id)
        .await?
        .ok_or_else(|| {
            LawbookError::NotFound(format!(
                "Lawyer {} has not published a schedule",
                payload.lawyer_id
            ))
        })?;

    let today = state.today_for(Some(&schedule));
    let existing = state
        .store
        .list_active_bookings_on(payload.lawyer_id, payload.date)
        .await?;
    validate_booking(&payload, today, &schedule.availability, &existing)?;

    let booking = state.store.create_booking(payload).await?;
    info!(
        "Booking {} created for lawyer {} on {} at {}",
        booking.id, booking.lawyer_id, booking.date, booking.time_slot
    );

    Ok(Json(ApiResponse::ok("Booking created", booking)))
}

/// `GET /api/booking/list?user_id=`
#[axum::debug_handler]
pub async fn list_user_bookings(
    State(state): State<Arc<ApiState>>,
    QueryParams(query): QueryParams<BookingListQuery>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, AppError> {
    let bookings = state.store.list_bookings_for_user(query.user_id).await?;
    Ok(Json(ApiResponse::ok("Bookings loaded", bookings)))
}

/// `GET /api/lawyer/:lawyer_id/bookings`
#[axum::debug_handler]
pub async fn list_lawyer_bookings(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, AppError> {
    let bookings = state.store.list_bookings_for_lawyer(lawyer_id).await?;
    Ok(Json(ApiResponse::ok("Bookings loaded", bookings)))
}

/// `GET /api/booking/detail/:booking_id`
#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    PathParams(booking_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let booking = find_booking(&state, booking_id).await?;
    Ok(Json(ApiResponse::ok("Booking loaded", booking)))
}

/// `POST /api/lawyer/:lawyer_id/bookings/:booking_id/confirm`
///
/// # Errors
///
/// * `LawbookError::NotFound` - no such booking for this lawyer
/// * `LawbookError::Authentication` - schedule password missing or wrong
/// * `LawbookError::Validation` - the booking is not pending
#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<ApiState>>,
    PathParams((lawyer_id, booking_id)): PathParams<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<BookingActionRequest>,
) -> Result<Json<ApiResponse<BookingStatusResponse>>, AppError> {
    let response =
        lawyer_transition(&state, lawyer_id, booking_id, payload.password.as_deref(), confirm)
            .await?;
    info!("Booking {} confirmed by lawyer {}", booking_id, lawyer_id);

    Ok(Json(ApiResponse::ok("Booking confirmed", response)))
}

/// `POST /api/lawyer/:lawyer_id/bookings/:booking_id/complete`
#[axum::debug_handler]
pub async fn complete_booking(
    State(state): State<Arc<ApiState>>,
    PathParams((lawyer_id, booking_id)): PathParams<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<BookingActionRequest>,
) -> Result<Json<ApiResponse<BookingStatusResponse>>, AppError> {
    let response =
        lawyer_transition(&state, lawyer_id, booking_id, payload.password.as_deref(), complete)
            .await?;
    info!("Booking {} completed by lawyer {}", booking_id, lawyer_id);

    Ok(Json(ApiResponse::ok("Booking completed", response)))
}

/// `POST /api/booking/cancel/:booking_id`
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    PathParams(booking_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<BookingStatusResponse>>, AppError> {
    let booking = find_booking(&state, booking_id).await?;

    let status = cancel(&booking)?;
    let updated = state.store.update_booking_status(booking_id, status).await?;
    info!("Booking {} cancelled", booking_id);

    Ok(Json(ApiResponse::ok(
        "Booking cancelled",
        BookingStatusResponse {
            id: updated.id,
            status: updated.status,
        },
    )))
}

async fn find_booking(state: &ApiState, booking_id: Uuid) -> Result<Booking, AppError> {
    let booking = state.store.get_booking(booking_id).await?.ok_or_else(|| {
        LawbookError::NotFound(format!("Booking with ID {} not found", booking_id))
    })?;
    Ok(booking)
}

/// Applies a lawyer-side status change. Bookings of another lawyer are
/// reported as missing, and a protected schedule needs its password.
async fn lawyer_transition(
    state: &ApiState,
    lawyer_id: Uuid,
    booking_id: Uuid,
    password: Option<&str>,
    transition: fn(&Booking) -> LawbookResult<BookingStatus>,
) -> Result<BookingStatusResponse, AppError> {
    let booking = find_booking(state, booking_id).await?;
    if booking.lawyer_id != lawyer_id {
        return Err(AppError(LawbookError::NotFound(format!(
            "Booking with ID {} not found for lawyer {}",
            booking_id, lawyer_id
        ))));
    }

    if let Some(schedule) = state.store.get_schedule(lawyer_id).await? {
        auth::authorize_schedule_edit(state.store.as_ref(), &schedule, password).await?;
    }

    let status = transition(&booking)?;
    let updated = state.store.update_booking_status(booking_id, status).await?;

    Ok(BookingStatusResponse {
        id: updated.id,
        status: updated.status,
    })
}
