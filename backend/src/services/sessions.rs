//! Seizure session log
//!
//! In-memory store for seizure episodes with simple per-user aggregates.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{SeizureSession, SeizureSeverity};

/// Input for logging a seizure session
#[derive(Debug, Deserialize)]
pub struct LogSessionInput {
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub severity: Option<SeizureSeverity>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub triggers: Option<String>,
}

/// Input for closing an ongoing session
#[derive(Debug, Deserialize)]
pub struct EndSessionInput {
    pub end_time: DateTime<Utc>,
    pub severity: Option<SeizureSeverity>,
}

/// Per-user session aggregates
#[derive(Debug, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
    /// Mean duration over ended sessions, in seconds
    pub average_duration_seconds: Option<f64>,
}

/// In-memory store of seizure sessions
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SeizureSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a new session; `end_time`, when given, must not precede start
    pub async fn log_session(&self, input: LogSessionInput) -> AppResult<SeizureSession> {
        if let Some(end) = input.end_time {
            if end < input.start_time {
                return Err(AppError::Validation {
                    field: "end_time".to_string(),
                    message: "Session end time cannot precede its start time".to_string(),
                });
            }
        }

        let session = SeizureSession {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            start_time: input.start_time,
            end_time: input.end_time,
            severity: input.severity,
            notes: input.notes,
            location: input.location,
            triggers: input.triggers,
            created_at: Utc::now(),
        };

        self.sessions.write().await.insert(session.id, session.clone());
        tracing::info!(session_id = %session.id, user_id = %session.user_id, "Seizure session logged");

        Ok(session)
    }

    /// Close an ongoing session
    pub async fn end_session(&self, session_id: Uuid, input: EndSessionInput) -> AppResult<SeizureSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound("Seizure session".to_string()))?;

        if session.end_time.is_some() {
            return Err(AppError::InvalidStateTransition(
                "Session has already ended".to_string(),
            ));
        }
        if input.end_time < session.start_time {
            return Err(AppError::Validation {
                field: "end_time".to_string(),
                message: "Session end time cannot precede its start time".to_string(),
            });
        }

        session.end_time = Some(input.end_time);
        if input.severity.is_some() {
            session.severity = input.severity;
        }

        Ok(session.clone())
    }

    /// Get a session by ID
    pub async fn get(&self, session_id: Uuid) -> AppResult<SeizureSession> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Seizure session".to_string()))
    }

    /// List a user's sessions, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<SeizureSession> {
        let sessions = self.sessions.read().await;
        let mut result: Vec<SeizureSession> = sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        result
    }

    /// Aggregate stats over a user's sessions
    pub async fn stats_for_user(&self, user_id: Uuid) -> SessionStats {
        let sessions = self.list_for_user(user_id).await;

        let count_severity = |severity: SeizureSeverity| {
            sessions
                .iter()
                .filter(|s| s.severity == Some(severity))
                .count()
        };

        let durations: Vec<i64> = sessions
            .iter()
            .filter_map(|s| s.duration_seconds())
            .collect();
        let average_duration_seconds = if durations.is_empty() {
            None
        } else {
            Some(durations.iter().sum::<i64>() as f64 / durations.len() as f64)
        };

        SessionStats {
            total: sessions.len(),
            mild: count_severity(SeizureSeverity::Mild),
            moderate: count_severity(SeizureSeverity::Moderate),
            severe: count_severity(SeizureSeverity::Severe),
            average_duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input(user_id: Uuid, minutes: Option<i64>, severity: Option<SeizureSeverity>) -> LogSessionInput {
        let start = Utc::now() - Duration::hours(1);
        LogSessionInput {
            user_id,
            start_time: start,
            end_time: minutes.map(|m| start + Duration::minutes(m)),
            severity,
            notes: None,
            location: None,
            triggers: None,
        }
    }

    #[tokio::test]
    async fn rejects_end_before_start() {
        let store = SessionStore::new();
        let mut bad = input(Uuid::new_v4(), None, None);
        bad.end_time = Some(bad.start_time - Duration::minutes(5));

        let result = store.log_session(bad).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn ending_twice_is_rejected() {
        let store = SessionStore::new();
        let session = store
            .log_session(input(Uuid::new_v4(), None, None))
            .await
            .unwrap();

        let end = EndSessionInput {
            end_time: session.start_time + Duration::minutes(3),
            severity: Some(SeizureSeverity::Mild),
        };
        store.end_session(session.id, end).await.unwrap();

        let again = EndSessionInput {
            end_time: session.start_time + Duration::minutes(10),
            severity: None,
        };
        let result = store.end_session(session.id, again).await;
        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));
    }

    #[tokio::test]
    async fn stats_aggregate_by_severity_and_duration() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        store
            .log_session(input(user_id, Some(2), Some(SeizureSeverity::Mild)))
            .await
            .unwrap();
        store
            .log_session(input(user_id, Some(4), Some(SeizureSeverity::Severe)))
            .await
            .unwrap();
        // Ongoing session: counts toward totals but not duration
        store
            .log_session(input(user_id, None, Some(SeizureSeverity::Severe)))
            .await
            .unwrap();

        let stats = store.stats_for_user(user_id).await;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.mild, 1);
        assert_eq!(stats.moderate, 0);
        assert_eq!(stats.severe, 2);
        // Mean of 120 s and 240 s
        assert_eq!(stats.average_duration_seconds, Some(180.0));
    }
}
