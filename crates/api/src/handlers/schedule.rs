use axum::{
    extract::State,
    Json,
};
use lawbook_core::{
    errors::LawbookError,
    models::{
        response::ApiResponse,
        schedule::{
            GetScheduleResponse, UpdateScheduleRequest, UpdateScheduleResponse,
            VerifyPasswordRequest, VerifyPasswordResponse,
        },
    },
    validation::validate_availability,
    window::parse_timezone,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    extractors::{JsonBody, PathParams},
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// `GET /api/schedule/:lawyer_id`
///
/// A lawyer who never saved a schedule is reported with every day off.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<GetScheduleResponse>>, AppError> {
    let response = state
        .store
        .get_schedule(lawyer_id)
        .await?
        .map(GetScheduleResponse::from)
        .unwrap_or_else(|| GetScheduleResponse::empty(lawyer_id));

    Ok(Json(ApiResponse::ok("Schedule loaded", response)))
}

/// `PUT /api/lawyer/:lawyer_id/schedule`
///
/// Replaces the weekly availability after validating it. Protected
/// schedules need their current password; `new_password` sets or rotates it.
///
/// # Errors
///
/// * `LawbookError::Validation` - invalid ranges or unknown timezone
/// * `LawbookError::Authentication` - missing or wrong password
#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
    JsonBody(payload): JsonBody<UpdateScheduleRequest>,
) -> Result<Json<ApiResponse<UpdateScheduleResponse>>, AppError> {
    validate_availability(&payload.availability)?;
    if let Some(timezone) = &payload.timezone {
        parse_timezone(timezone)?;
    }

    let existing = state.store.get_schedule(lawyer_id).await?;
    if let Some(schedule) = &existing {
        auth::authorize_schedule_edit(state.store.as_ref(), schedule, payload.password.as_deref())
            .await?;
    }

    let password_hash = match &payload.new_password {
        Some(password) if password.trim().is_empty() => {
            return Err(AppError(LawbookError::Validation(
                "New password cannot be empty".to_string(),
            )));
        }
        Some(password) => Some(auth::hash_password(password)?),
        None => existing.as_ref().and_then(|s| s.password_hash.clone()),
    };

    let timezone = payload
        .timezone
        .or_else(|| existing.map(|s| s.timezone))
        .unwrap_or_else(|| state.default_timezone.name().to_string());

    let saved = state
        .store
        .upsert_schedule(lawyer_id, payload.availability, password_hash, timezone)
        .await?;

    info!("Schedule updated for lawyer {}", lawyer_id);

    let response = UpdateScheduleResponse {
        lawyer_id,
        updated_at: saved.updated_at,
    };
    Ok(Json(ApiResponse::ok("Schedule updated", response)))
}

/// `POST /api/lawyer/:lawyer_id/schedule/verify`
#[axum::debug_handler]
pub async fn verify_password(
    State(state): State<Arc<ApiState>>,
    PathParams(lawyer_id): PathParams<Uuid>,
    JsonBody(payload): JsonBody<VerifyPasswordRequest>,
) -> Result<Json<ApiResponse<VerifyPasswordResponse>>, AppError> {
    if state.store.get_schedule(lawyer_id).await?.is_none() {
        return Err(AppError(LawbookError::NotFound(format!(
            "Schedule for lawyer {} not found",
            lawyer_id
        ))));
    }

    let valid = state
        .store
        .verify_password(lawyer_id, payload.password)
        .await?;

    Ok(Json(ApiResponse::ok(
        if valid { "Password accepted" } else { "Password rejected" },
        VerifyPasswordResponse { valid },
    )))
}
