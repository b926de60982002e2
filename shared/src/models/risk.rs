//! Risk assessment models

use serde::{Deserialize, Serialize};

/// Questionnaire/profile feature vector consumed by the risk scorer
///
/// Every non-boolean field is independently optional; a missing field
/// simply fails its rule's trigger and never produces an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskProfile {
    pub age: Option<i32>,
    #[serde(default)]
    pub has_condition: bool,
    pub condition_frequency: Option<ConditionFrequency>,
    pub medication_compliance: Option<MedicationCompliance>,
    pub sleep_hours_avg: Option<f64>,
    pub stress_level: Option<StressLevel>,
    pub alcohol_consumption: Option<AlcoholConsumption>,
    #[serde(default)]
    pub lives_alone: bool,
    #[serde(default)]
    pub has_emergency_contact: bool,
    #[serde(default)]
    pub has_medical_alert: bool,
}

/// How often seizures occur
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConditionFrequency {
    Daily,
    Weekly,
    Monthly,
    Rare,
    None,
}

/// Self-reported medication adherence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationCompliance {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

/// Self-reported alcohol consumption
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholConsumption {
    None,
    Occasional,
    Moderate,
    Heavy,
}

/// Categorical risk band derived from the numeric score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// 0-24 points
    Low,
    /// 25-49 points
    Medium,
    /// 50-74 points
    High,
    /// 75-100 points
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Classify a 0-100 risk score into a risk band
pub fn classify_risk_level(score: f64) -> RiskLevel {
    if score >= 75.0 {
        RiskLevel::Critical
    } else if score >= 50.0 {
        RiskLevel::High
    } else if score >= 25.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Result of scoring a risk profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Bounded score in [0, 100]
    pub score: f64,
    pub level: RiskLevel,
    /// Recommendation strings in fixed rule-evaluation order
    pub recommendations: Vec<String>,
}
