use axum::{routing::get, Json, Router};
use lawbook_core::models::response::ApiResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
}

fn service_info() -> ServiceInfo {
    ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

async fn health_check() -> Json<ApiResponse<ServiceInfo>> {
    Json(ApiResponse::ok("ok", service_info()))
}

async fn version() -> Json<ApiResponse<ServiceInfo>> {
    Json(ApiResponse::ok("version", service_info()))
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
