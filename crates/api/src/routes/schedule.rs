use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule/:lawyer_id",
            get(handlers::schedule::get_schedule),
        )
        .route(
            "/api/lawyer/:lawyer_id/schedule",
            put(handlers::schedule::update_schedule),
        )
        .route(
            "/api/lawyer/:lawyer_id/schedule/verify",
            post(handlers::schedule::verify_password),
        )
}
