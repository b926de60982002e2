//! Heuristic risk scoring over a questionnaire profile
//!
//! Deterministic weighted-sum model: every triggered rule contributes a
//! fixed non-negative amount and the final score is the sum clamped to
//! [0, 100]. Missing optional fields fail their trigger, never error.

use crate::models::{
    AlcoholConsumption, ConditionFrequency, MedicationCompliance, RiskAssessment, RiskProfile,
    StressLevel, classify_risk_level,
};

/// Upper bound for any computed risk score
pub const MAX_RISK_SCORE: f64 = 100.0;

/// Compute the bounded risk score and recommendations for a profile
///
/// Identical input always yields identical output; adding a risk factor to
/// an otherwise-fixed profile never lowers the score.
pub fn compute_risk_assessment(profile: &RiskProfile) -> RiskAssessment {
    let score = compute_risk_score(profile);
    RiskAssessment {
        score,
        level: classify_risk_level(score),
        recommendations: generate_recommendations(profile),
    }
}

/// Sum of triggered rule contributions, clamped to [0, 100]
pub fn compute_risk_score(profile: &RiskProfile) -> f64 {
    let mut score: f64 = 0.0;

    // Age bands are mutually exclusive: the extreme band wins
    if let Some(age) = profile.age {
        if !(18..=65).contains(&age) {
            score += 15.0;
        } else if (18..25).contains(&age) || (56..=65).contains(&age) {
            score += 10.0;
        }
    }

    if profile.has_condition {
        score += 25.0;

        match profile.condition_frequency {
            Some(ConditionFrequency::Daily) => score += 30.0,
            Some(ConditionFrequency::Weekly) => score += 20.0,
            Some(ConditionFrequency::Monthly) => score += 10.0,
            _ => {}
        }

        match profile.medication_compliance {
            Some(MedicationCompliance::Poor) => score += 20.0,
            Some(MedicationCompliance::Fair) => score += 10.0,
            _ => {}
        }
    }

    if profile.sleep_hours_avg.is_some_and(|h| h < 6.0) {
        score += 15.0;
    }

    match profile.stress_level {
        Some(StressLevel::High) => score += 15.0,
        Some(StressLevel::Moderate) => score += 8.0,
        _ => {}
    }

    if matches!(
        profile.alcohol_consumption,
        Some(AlcoholConsumption::Moderate) | Some(AlcoholConsumption::Heavy)
    ) {
        score += 10.0;
    }

    if profile.lives_alone {
        score += 20.0;
    }

    if !profile.has_emergency_contact {
        score += 15.0;
    }

    score.min(MAX_RISK_SCORE)
}

/// Generate recommendation strings in fixed rule order
///
/// Each rule emits zero or one recommendation; the output order always
/// follows the rule order below. The list is empty for a profile with no
/// risk factors.
pub fn generate_recommendations(profile: &RiskProfile) -> Vec<String> {
    let mut recommendations = Vec::new();

    if profile.has_condition {
        if profile.medication_compliance == Some(MedicationCompliance::Poor) {
            recommendations.push(
                "Set up medication reminders and review adherence with the care team".to_string(),
            );
        }

        if matches!(
            profile.condition_frequency,
            Some(ConditionFrequency::Daily) | Some(ConditionFrequency::Weekly)
        ) {
            recommendations.push(
                "Seizure frequency is high; escalate to an epilepsy specialist".to_string(),
            );
        }

        if !profile.has_emergency_contact {
            recommendations
                .push("Set up emergency contacts who can respond to alerts".to_string());
        }
    }

    if profile.sleep_hours_avg.is_some_and(|h| h < 6.0) {
        recommendations.push(
            "Average sleep is below 6 hours; establish a consistent sleep routine".to_string(),
        );
    }

    if profile.stress_level == Some(StressLevel::High) {
        recommendations
            .push("Practice stress management techniques and consider counselling".to_string());
    }

    if profile.lives_alone {
        recommendations.push(
            "Living alone increases risk; arrange regular check-ins or a safety device"
                .to_string(),
        );
    }

    if !profile.has_medical_alert {
        recommendations
            .push("Wear a medical alert bracelet or carry a medical ID card".to_string());
    }

    recommendations
}
