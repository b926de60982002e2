//! SafeStep Epilepsy Monitoring Platform - Backend Server
//!
//! Caregiver-facing service for GPS safety-zone tracking, heuristic risk
//! assessment, and seizure session logging.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::{RiskService, SessionStore, TrackingService, ZoneRegistry};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub zones: ZoneRegistry,
    pub tracking: TrackingService,
    pub risk: RiskService,
    pub sessions: SessionStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let zones = ZoneRegistry::new(config.tracking.max_zones_per_user);
        let tracking = TrackingService::new(zones.clone());
        Self {
            zones,
            tracking,
            risk: RiskService::new(),
            sessions: SessionStore::new(),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safestep_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting SafeStep Server");
    tracing::info!("Environment: {}", config.environment);

    let port = config.server.port;
    let state = AppState::new(config);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "SafeStep Epilepsy Monitoring Platform API v1.0"
}
