//! HTTP handlers for seizure session endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::sessions::{EndSessionInput, LogSessionInput, SessionStats};
use crate::AppState;
use shared::SeizureSession;

/// Query parameters for listing sessions
#[derive(Debug, Deserialize)]
pub struct SessionListQuery {
    pub user_id: Uuid,
}

/// Log a seizure session
pub async fn log_session(
    State(state): State<AppState>,
    Json(input): Json<LogSessionInput>,
) -> AppResult<Json<SeizureSession>> {
    let session = state.sessions.log_session(input).await?;
    Ok(Json(session))
}

/// Close an ongoing seizure session
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<EndSessionInput>,
) -> AppResult<Json<SeizureSession>> {
    let session = state.sessions.end_session(session_id, input).await?;
    Ok(Json(session))
}

/// Get a session by ID
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SeizureSession>> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session))
}

/// List a user's sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionListQuery>,
) -> AppResult<Json<Vec<SeizureSession>>> {
    Ok(Json(state.sessions.list_for_user(query.user_id).await))
}

/// Aggregate session stats for a user
pub async fn get_session_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<SessionStats>> {
    Ok(Json(state.sessions.stats_for_user(user_id).await))
}
