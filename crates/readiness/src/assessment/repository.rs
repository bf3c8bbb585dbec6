use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{SectionId, SessionId};
use super::scoring::Recommendation;
use super::session::AssessmentSession;

/// Stored session plus the bookkeeping the HTTP surface reports.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub calculated_at: Option<DateTime<Utc>>,
    pub session: AssessmentSession,
}

impl SessionRecord {
    pub fn new(session_id: SessionId, session: AssessmentSession, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            started_at: now,
            updated_at: now,
            calculated_at: None,
            session,
        }
    }

    pub fn status_view(&self) -> SessionStatusView {
        let responses = self.session.responses();
        let answered_by_section = SectionId::ALL
            .into_iter()
            .map(|section| (section, responses.answered_in(section)))
            .collect();
        let report = self.session.score_report();

        SessionStatusView {
            session_id: self.session_id.clone(),
            answered: responses.len(),
            answered_by_section,
            complete: self.session.is_complete(),
            started_at: self.started_at,
            updated_at: self.updated_at,
            calculated_at: self.calculated_at,
            confidence: report.map(|report| report.confidence),
            recommendation: report.map(|report| report.recommendation),
        }
    }
}

/// Storage abstraction so the service can run against memory or a database.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session capacity of {0} reached")]
    CapacityExceeded(usize),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public summary of a session's progress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub answered: usize,
    pub answered_by_section: BTreeMap<SectionId, usize>,
    pub complete: bool,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}
