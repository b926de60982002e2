//! HTTP handlers for location tracking endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::tracking::LocationCheck;
use crate::AppState;
use shared::GeoPoint;

/// Input for checking a location sample
#[derive(Debug, Deserialize)]
pub struct CheckLocationInput {
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

/// Evaluate a location sample against the user's safety zones
pub async fn check_location(
    State(state): State<AppState>,
    Json(input): Json<CheckLocationInput>,
) -> AppResult<Json<LocationCheck>> {
    let point = GeoPoint::new(input.latitude, input.longitude);
    let check = state.tracking.check_location(input.user_id, point).await?;
    Ok(Json(check))
}

/// Last known location check for a user
pub async fn get_last_check(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<LocationCheck>> {
    let check = state.tracking.last_check(user_id).await?;
    Ok(Json(check))
}
