//! Seizure session logging models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged seizure episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeizureSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    /// `None` while the episode is still ongoing
    pub end_time: Option<DateTime<Utc>>,
    pub severity: Option<SeizureSeverity>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub triggers: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SeizureSession {
    /// Duration in whole seconds, if the session has ended
    pub fn duration_seconds(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_seconds())
    }
}

/// Observed severity of a seizure episode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeizureSeverity {
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for SeizureSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeizureSeverity::Mild => write!(f, "Mild"),
            SeizureSeverity::Moderate => write!(f, "Moderate"),
            SeizureSeverity::Severe => write!(f, "Severe"),
        }
    }
}
