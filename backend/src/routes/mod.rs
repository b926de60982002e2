//! Route definitions for the SafeStep backend

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Safety zone management
        .nest("/zones", zone_routes())
        // Location tracking
        .nest("/tracking", tracking_routes())
        // Risk assessment
        .nest("/risk", risk_routes())
        // Seizure session log
        .nest("/sessions", session_routes())
}

/// Safety zone management routes
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_zones).post(handlers::create_zone))
        .route(
            "/:zone_id",
            get(handlers::get_zone)
                .put(handlers::update_zone)
                .delete(handlers::delete_zone),
        )
        .route("/:zone_id/approve", put(handlers::approve_zone))
}

/// Location tracking routes
fn tracking_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(handlers::check_location))
        .route("/:user_id/last", get(handlers::get_last_check))
}

/// Risk assessment routes
fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/assess", post(handlers::assess_risk))
        .route("/:user_id", get(handlers::get_latest_assessment))
}

/// Seizure session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_sessions).post(handlers::log_session),
        )
        .route("/:session_id", get(handlers::get_session))
        .route("/:session_id/end", put(handlers::end_session))
        .route("/stats/:user_id", get(handlers::get_session_stats))
}
