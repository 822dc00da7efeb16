//! # Lawbook API
//!
//! The web server for the Lawbook booking service. It lets lawyers publish
//! their weekly availability and lets clients list bookable hourly slots and
//! book them.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Parse requests, call the core rules and the store
//! - **Middleware**: Edit passwords and error-to-response mapping
//! - **Config**: Environment-driven server settings
//!
//! Handlers reach the database only through [`lawbook_db::Store`], so the
//! router can be driven in tests with a mock store.

/// Configuration module for API settings
pub mod config;
/// Extractors that answer bad input with the error envelope
pub mod extractors;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use eyre::Result;
use lawbook_core::{models::schedule::LawyerSchedule, window};
use lawbook_db::Store;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Persistence for schedules and bookings
    pub store: Arc<dyn Store>,
    /// Zone used for lawyers who have not chosen one
    pub default_timezone: Tz,
}

impl ApiState {
    pub fn new(store: Arc<dyn Store>, default_timezone: Tz) -> Self {
        Self {
            store,
            default_timezone,
        }
    }

    /// Today's date for a lawyer, in the schedule's own zone when it names a
    /// valid one.
    pub fn today_for(&self, schedule: Option<&LawyerSchedule>) -> NaiveDate {
        let tz = schedule
            .and_then(|s| window::parse_timezone(&s.timezone).ok())
            .unwrap_or(self.default_timezone);
        window::today_in(tz)
    }
}

/// Builds the router with every route and request tracing attached.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Weekly availability editing and lookup
        .merge(routes::schedule::routes())
        // Booking window and derived slots
        .merge(routes::availability::routes())
        // Booking lifecycle
        .merge(routes::booking::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and store
///
/// Sets up logging, assembles the router and serves until the process is
/// stopped.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn Store>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store, config.booking_timezone));
    let app = app(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
