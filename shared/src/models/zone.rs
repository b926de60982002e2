//! Safety zone models for GPS geofencing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GeoPoint;

/// A circular geofenced region
///
/// Zones are created and edited by caregivers and must be approved by an
/// admin before they participate in location evaluation. Center and radius
/// are optional so a half-configured zone is representable; the evaluator
/// skips such zones rather than failing on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub center: Option<GeoPoint>,
    /// Radius in meters; must be > 0 to be evaluable
    pub radius_meters: Option<f64>,
    pub zone_type: ZoneType,
    pub active: bool,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Zone {
    /// Whether this zone participates in evaluation at all
    ///
    /// Inactive, unapproved, or incompletely configured zones are treated
    /// as non-existent for a given evaluation call.
    pub fn is_evaluable(&self) -> bool {
        self.active
            && self.approved
            && self.center.is_some()
            && self.radius_meters.is_some_and(|r| r > 0.0)
    }
}

/// Kind of geofenced region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Safe,
    Danger,
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneType::Safe => write!(f, "Safe"),
            ZoneType::Danger => write!(f, "Danger"),
        }
    }
}

/// Containment status of a point relative to the zone set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Safe,
    Danger,
    Outside,
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneStatus::Safe => write!(f, "Safe"),
            ZoneStatus::Danger => write!(f, "Danger"),
            ZoneStatus::Outside => write!(f, "Outside"),
        }
    }
}

/// Result of evaluating a point against a zone snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneEvaluation {
    pub status: ZoneStatus,
    /// The zone that determined the status; `None` when outside every zone
    pub zone_id: Option<Uuid>,
}

impl ZoneEvaluation {
    pub fn outside() -> Self {
        Self {
            status: ZoneStatus::Outside,
            zone_id: None,
        }
    }
}
