//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and the `{ success, message }`
//! envelope so clients can treat every failure the same way.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lawbook_core::{errors::LawbookError, models::response::ApiResponse};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use lawbook_api::middleware::error_handling::AppError;
/// use lawbook_core::errors::LawbookError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(LawbookError::NotFound("Booking not found".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub LawbookError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LawbookError::NotFound(_) => StatusCode::NOT_FOUND,
            LawbookError::Validation(_) => StatusCode::BAD_REQUEST,
            LawbookError::Conflict(_) => StatusCode::CONFLICT,
            LawbookError::Authentication(_) => StatusCode::UNAUTHORIZED,
            LawbookError::Authorization(_) => StatusCode::FORBIDDEN,
            LawbookError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LawbookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Infrastructure details stay in the log.
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

impl From<LawbookError> for AppError {
    fn from(err: LawbookError) -> Self {
        AppError(err)
    }
}

/// Recovers a `LawbookError` carried inside the report; anything else is a
/// database failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        match err.downcast::<LawbookError>() {
            Ok(domain_error) => AppError(domain_error),
            Err(err) => AppError(LawbookError::Database(err)),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(LawbookError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(LawbookError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(LawbookError::Validation(rejection.body_text()))
    }
}

/// Maps a LawbookError to an HTTP response
pub fn map_error(err: LawbookError) -> Response {
    AppError(err).into_response()
}
