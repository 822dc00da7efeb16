use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule/:lawyer_id/dates",
            get(handlers::availability::list_dates),
        )
        .route(
            "/api/schedule/:lawyer_id/slots",
            get(handlers::availability::list_slots),
        )
}
