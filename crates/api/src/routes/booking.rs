use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/booking/create", post(handlers::booking::create_booking))
        .route("/api/booking/list", get(handlers::booking::list_user_bookings))
        .route(
            "/api/booking/cancel/:booking_id",
            post(handlers::booking::cancel_booking),
        )
        .route(
            "/api/booking/detail/:booking_id",
            get(handlers::booking::get_booking),
        )
        .route(
            "/api/lawyer/:lawyer_id/bookings",
            get(handlers::booking::list_lawyer_bookings),
        )
        .route(
            "/api/lawyer/:lawyer_id/bookings/:booking_id/confirm",
            post(handlers::booking::confirm_booking),
        )
        .route(
            "/api/lawyer/:lawyer_id/bookings/:booking_id/complete",
            post(handlers::booking::complete_booking),
        )
}
