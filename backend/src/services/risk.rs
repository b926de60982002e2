//! Risk assessment service
//!
//! Validates questionnaire input at the boundary, runs the pure scoring
//! model, and keeps the latest assessment per user.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{
    compute_risk_assessment, validate_age, validate_sleep_hours, RiskLevel, RiskProfile,
};

/// A stored risk assessment result
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: f64,
    pub level: RiskLevel,
    pub recommendations: Vec<String>,
    pub assessed_at: DateTime<Utc>,
}

/// Risk assessment service
#[derive(Clone, Default)]
pub struct RiskService {
    latest: Arc<RwLock<HashMap<Uuid, RiskAssessmentRecord>>>,
}

impl RiskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a profile and store the result as the user's latest assessment
    pub async fn assess(&self, user_id: Uuid, profile: RiskProfile) -> AppResult<RiskAssessmentRecord> {
        if let Some(age) = profile.age {
            validate_age(age).map_err(|e| AppError::Validation {
                field: "age".to_string(),
                message: e.to_string(),
            })?;
        }
        if let Some(hours) = profile.sleep_hours_avg {
            validate_sleep_hours(hours).map_err(|e| AppError::Validation {
                field: "sleep_hours_avg".to_string(),
                message: e.to_string(),
            })?;
        }

        let assessment = compute_risk_assessment(&profile);

        let record = RiskAssessmentRecord {
            id: Uuid::new_v4(),
            user_id,
            score: assessment.score,
            level: assessment.level,
            recommendations: assessment.recommendations,
            assessed_at: Utc::now(),
        };

        tracing::info!(
            %user_id,
            score = record.score,
            level = %record.level,
            "Risk assessment computed"
        );

        self.latest.write().await.insert(user_id, record.clone());

        Ok(record)
    }

    /// Latest stored assessment for a user
    pub async fn latest(&self, user_id: Uuid) -> AppResult<RiskAssessmentRecord> {
        self.latest
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Risk assessment".to_string()))
    }
}
