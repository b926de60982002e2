//! Safety zone registry
//!
//! In-memory zone management collaborator. The geofence evaluator reads a
//! snapshot per call and owns no zone state; this registry is the single
//! writer for zone records.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{validate_coordinates, validate_radius, validate_zone_name, GeoPoint, Zone, ZoneType};

/// In-memory registry of safety zones
#[derive(Clone)]
pub struct ZoneRegistry {
    zones: Arc<RwLock<HashMap<Uuid, Zone>>>,
    max_zones_per_user: usize,
}

/// Input for creating a zone
///
/// Center and radius may be omitted to stage a zone before its geometry is
/// known; such zones are stored but never participate in evaluation.
#[derive(Debug, Deserialize)]
pub struct CreateZoneInput {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_meters: Option<f64>,
    pub zone_type: ZoneType,
}

/// Input for updating a zone; `None` fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateZoneInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_meters: Option<f64>,
    pub zone_type: Option<ZoneType>,
    pub active: Option<bool>,
}

impl ZoneRegistry {
    pub fn new(max_zones_per_user: usize) -> Self {
        Self {
            zones: Arc::new(RwLock::new(HashMap::new())),
            max_zones_per_user,
        }
    }

    /// Create a new zone; starts unapproved
    pub async fn create(&self, input: CreateZoneInput) -> AppResult<Zone> {
        validate_zone_name(&input.name).map_err(|e| AppError::Validation {
            field: "name".to_string(),
            message: e.to_string(),
        })?;

        let center = Self::validate_geometry(
            input.latitude,
            input.longitude,
            input.radius_meters,
        )?;

        let mut zones = self.zones.write().await;

        let user_zone_count = zones.values().filter(|z| z.user_id == input.user_id).count();
        if user_zone_count >= self.max_zones_per_user {
            return Err(AppError::ZoneLimitReached(format!(
                "User already has {} zones",
                user_zone_count
            )));
        }

        let zone = Zone {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            name: input.name.trim().to_string(),
            description: input.description,
            center,
            radius_meters: input.radius_meters,
            zone_type: input.zone_type,
            active: true,
            approved: false,
            created_at: Utc::now(),
        };

        zones.insert(zone.id, zone.clone());
        tracing::info!(zone_id = %zone.id, zone_type = %zone.zone_type, "Zone created");

        Ok(zone)
    }

    /// Get a zone by ID
    pub async fn get(&self, zone_id: Uuid) -> AppResult<Zone> {
        self.zones
            .read()
            .await
            .get(&zone_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Zone".to_string()))
    }

    /// List all zones for a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Zone> {
        let zones = self.zones.read().await;
        let mut result: Vec<Zone> = zones
            .values()
            .filter(|z| z.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Update a zone's fields; unset input fields are left as-is
    pub async fn update(&self, zone_id: Uuid, input: UpdateZoneInput) -> AppResult<Zone> {
        if let Some(name) = &input.name {
            validate_zone_name(name).map_err(|e| AppError::Validation {
                field: "name".to_string(),
                message: e.to_string(),
            })?;
        }
        if let (Some(lat), Some(lon)) = (input.latitude, input.longitude) {
            validate_coordinates(&GeoPoint::new(lat, lon))
                .map_err(|e| AppError::InvalidCoordinates(e.to_string()))?;
        }
        if let Some(radius) = input.radius_meters {
            validate_radius(radius).map_err(|e| AppError::Validation {
                field: "radius_meters".to_string(),
                message: e.to_string(),
            })?;
        }

        let mut zones = self.zones.write().await;
        let zone = zones
            .get_mut(&zone_id)
            .ok_or_else(|| AppError::NotFound("Zone".to_string()))?;

        if let Some(name) = input.name {
            zone.name = name.trim().to_string();
        }
        if let Some(description) = input.description {
            zone.description = Some(description);
        }
        if let (Some(lat), Some(lon)) = (input.latitude, input.longitude) {
            zone.center = Some(GeoPoint::new(lat, lon));
        }
        if let Some(radius) = input.radius_meters {
            zone.radius_meters = Some(radius);
        }
        if let Some(zone_type) = input.zone_type {
            zone.zone_type = zone_type;
        }
        if let Some(active) = input.active {
            zone.active = active;
        }

        // Geometry and type edits must be re-reviewed before the zone is
        // evaluable again; name/description/active edits keep approval
        let geometry_changed = input.latitude.is_some()
            || input.longitude.is_some()
            || input.radius_meters.is_some()
            || input.zone_type.is_some();
        if geometry_changed {
            zone.approved = false;
        }

        Ok(zone.clone())
    }

    /// Mark a zone as approved so it participates in evaluation
    pub async fn approve(&self, zone_id: Uuid) -> AppResult<Zone> {
        let mut zones = self.zones.write().await;
        let zone = zones
            .get_mut(&zone_id)
            .ok_or_else(|| AppError::NotFound("Zone".to_string()))?;

        zone.approved = true;
        tracing::info!(zone_id = %zone.id, "Zone approved");

        Ok(zone.clone())
    }

    /// Delete a zone
    pub async fn delete(&self, zone_id: Uuid) -> AppResult<()> {
        let mut zones = self.zones.write().await;
        zones
            .remove(&zone_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Zone".to_string()))
    }

    /// Snapshot of a user's zones for evaluation, in creation order
    ///
    /// The danger-priority tie-break in the evaluator is first-match in
    /// input order, so the snapshot order is kept deterministic.
    pub async fn snapshot_for_user(&self, user_id: Uuid) -> Vec<Zone> {
        let zones = self.zones.read().await;
        let mut result: Vec<Zone> = zones
            .values()
            .filter(|z| z.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        result
    }

    fn validate_geometry(
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_meters: Option<f64>,
    ) -> AppResult<Option<GeoPoint>> {
        let center = match (latitude, longitude) {
            (Some(lat), Some(lon)) => {
                let point = GeoPoint::new(lat, lon);
                validate_coordinates(&point)
                    .map_err(|e| AppError::InvalidCoordinates(e.to_string()))?;
                Some(point)
            }
            (None, None) => None,
            _ => {
                return Err(AppError::Validation {
                    field: "center".to_string(),
                    message: "Latitude and longitude must be provided together".to_string(),
                })
            }
        };

        if let Some(radius) = radius_meters {
            validate_radius(radius).map_err(|e| AppError::Validation {
                field: "radius_meters".to_string(),
                message: e.to_string(),
            })?;
        }

        Ok(center)
    }
}
