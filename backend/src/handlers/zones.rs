//! HTTP handlers for safety zone management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::zones::{CreateZoneInput, UpdateZoneInput};
use crate::AppState;
use shared::Zone;

/// Query parameters for listing zones
#[derive(Debug, Deserialize)]
pub struct ZoneListQuery {
    pub user_id: Uuid,
}

/// Create a safety zone
pub async fn create_zone(
    State(state): State<AppState>,
    Json(input): Json<CreateZoneInput>,
) -> AppResult<Json<Zone>> {
    let zone = state.zones.create(input).await?;
    Ok(Json(zone))
}

/// List zones for a user
pub async fn list_zones(
    State(state): State<AppState>,
    Query(query): Query<ZoneListQuery>,
) -> AppResult<Json<Vec<Zone>>> {
    Ok(Json(state.zones.list_for_user(query.user_id).await))
}

/// Get a zone by ID
pub async fn get_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
) -> AppResult<Json<Zone>> {
    let zone = state.zones.get(zone_id).await?;
    Ok(Json(zone))
}

/// Update a zone
pub async fn update_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
    Json(input): Json<UpdateZoneInput>,
) -> AppResult<Json<Zone>> {
    let zone = state.zones.update(zone_id, input).await?;
    Ok(Json(zone))
}

/// Approve a zone for evaluation
pub async fn approve_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
) -> AppResult<Json<Zone>> {
    let zone = state.zones.approve(zone_id).await?;
    Ok(Json(zone))
}

/// Delete a zone
pub async fn delete_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    state.zones.delete(zone_id).await?;
    Ok(Json(serde_json::json!({ "deleted": zone_id })))
}
