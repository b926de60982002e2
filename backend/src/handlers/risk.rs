//! HTTP handlers for risk assessment endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::risk::RiskAssessmentRecord;
use crate::AppState;
use shared::RiskProfile;

/// Input for computing a risk assessment
#[derive(Debug, Deserialize)]
pub struct AssessRiskInput {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub profile: RiskProfile,
}

/// Score a questionnaire profile and store the result
pub async fn assess_risk(
    State(state): State<AppState>,
    Json(input): Json<AssessRiskInput>,
) -> AppResult<Json<RiskAssessmentRecord>> {
    let record = state.risk.assess(input.user_id, input.profile).await?;
    Ok(Json(record))
}

/// Latest stored assessment for a user
pub async fn get_latest_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<RiskAssessmentRecord>> {
    let record = state.risk.latest(user_id).await?;
    Ok(Json(record))
}
