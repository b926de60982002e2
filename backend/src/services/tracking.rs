//! Location tracking service
//!
//! Validates incoming GPS samples, evaluates them against the user's zone
//! snapshot, and remembers the last check per user so status transitions
//! can be detected and logged.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::zones::ZoneRegistry;
use shared::{evaluate_zone_status, validate_coordinates, GeoPoint, ZoneEvaluation, ZoneStatus};

/// Result of checking one location sample
#[derive(Debug, Clone, Serialize)]
pub struct LocationCheck {
    pub user_id: Uuid,
    pub point: GeoPoint,
    pub evaluation: ZoneEvaluation,
    pub checked_at: DateTime<Utc>,
}

/// Tracking service holding the last known check per user
#[derive(Clone)]
pub struct TrackingService {
    zones: ZoneRegistry,
    last_checks: Arc<RwLock<HashMap<Uuid, LocationCheck>>>,
}

impl TrackingService {
    pub fn new(zones: ZoneRegistry) -> Self {
        Self {
            zones,
            last_checks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Evaluate a location sample against the user's current zones
    ///
    /// Rejects out-of-range coordinates before evaluation; the Haversine
    /// math would otherwise silently produce meaningless distances.
    pub async fn check_location(&self, user_id: Uuid, point: GeoPoint) -> AppResult<LocationCheck> {
        validate_coordinates(&point).map_err(|e| AppError::InvalidCoordinates(e.to_string()))?;

        let snapshot = self.zones.snapshot_for_user(user_id).await;
        let evaluation = evaluate_zone_status(&point, &snapshot);

        let check = LocationCheck {
            user_id,
            point,
            evaluation,
            checked_at: Utc::now(),
        };

        let mut last_checks = self.last_checks.write().await;
        let previous_status = last_checks.get(&user_id).map(|c| c.evaluation.status);
        self.log_transition(user_id, previous_status, &check);
        last_checks.insert(user_id, check.clone());

        Ok(check)
    }

    /// Last known check for a user, if any
    pub async fn last_check(&self, user_id: Uuid) -> AppResult<LocationCheck> {
        self.last_checks
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Location check".to_string()))
    }

    fn log_transition(
        &self,
        user_id: Uuid,
        previous: Option<ZoneStatus>,
        check: &LocationCheck,
    ) {
        let current = check.evaluation.status;
        if previous == Some(current) {
            return;
        }

        match current {
            ZoneStatus::Danger => tracing::warn!(
                %user_id,
                zone_id = ?check.evaluation.zone_id,
                "User entered a danger zone"
            ),
            ZoneStatus::Outside if previous == Some(ZoneStatus::Safe) => tracing::warn!(
                %user_id,
                "User left their safe zone"
            ),
            _ => tracing::info!(%user_id, status = %current, "Zone status changed"),
        }
    }
}
