use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use super::catalog::QuestionBank;
use super::domain::{AnswerValue, QuestionId, SectionId, SessionId};
use super::repository::{RepositoryError, SessionRecord, SessionRepository};
use super::scoring::ScoreReport;
use super::session::AssessmentSession;

/// One answer as posted by the questionnaire front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSubmission {
    pub section_id: SectionId,
    pub question_id: QuestionId,
    pub answer: AnswerValue,
}

/// Service hosting many sessions behind a repository.
///
/// Every write runs under one gate so a calculation never sees half of a concurrent
/// upsert or reset.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    bank: Arc<QuestionBank>,
    writes: Mutex<()>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, bank: Arc<QuestionBank>) -> Self {
        Self {
            repository,
            bank,
            writes: Mutex::new(()),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn start(&self) -> Result<SessionRecord, AssessmentServiceError> {
        let record = SessionRecord::new(
            next_session_id(),
            AssessmentSession::new(Arc::clone(&self.bank)),
            Utc::now(),
        );
        let stored = self.repository.insert(record)?;
        info!(session = %stored.session_id, "assessment session started");
        Ok(stored)
    }

    pub fn record_response(
        &self,
        session_id: &SessionId,
        submission: ResponseSubmission,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        self.modify(session_id, |record| {
            record.session.upsert(
                submission.section_id,
                submission.question_id,
                submission.answer,
            );
        })
    }

    pub fn lookup(
        &self,
        session_id: &SessionId,
        section: SectionId,
        question_id: &str,
    ) -> Result<Option<AnswerValue>, AssessmentServiceError> {
        let record = self.get(session_id)?;
        Ok(record.session.lookup(section, question_id).cloned())
    }

    pub fn is_complete(&self, session_id: &SessionId) -> Result<bool, AssessmentServiceError> {
        Ok(self.get(session_id)?.session.is_complete())
    }

    /// Scores the session's current answers; completeness is not required.
    pub fn calculate(&self, session_id: &SessionId) -> Result<ScoreReport, AssessmentServiceError> {
        let mut report = None;
        self.modify(session_id, |record| {
            report = Some(*record.session.calculate());
            record.calculated_at = Some(record.updated_at);
        })?;
        report.ok_or_else(|| AssessmentServiceError::Repository(RepositoryError::NotFound))
    }

    pub fn report(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<ScoreReport>, AssessmentServiceError> {
        Ok(self.get(session_id)?.session.score_report().copied())
    }

    pub fn reset(&self, session_id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        self.modify(session_id, |record| {
            record.session.reset();
            record.calculated_at = None;
        })
    }

    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn finish(&self, session_id: &SessionId) -> Result<(), AssessmentServiceError> {
        let _gate = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        self.repository.remove(session_id)?;
        info!(session = %session_id, "assessment session removed");
        Ok(())
    }

    fn modify<F>(
        &self,
        session_id: &SessionId,
        change: F,
    ) -> Result<SessionRecord, AssessmentServiceError>
    where
        F: FnOnce(&mut SessionRecord),
    {
        let _gate = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        let mut record = self.get(session_id)?;
        record.updated_at = Utc::now();
        change(&mut record);
        self.repository.update(record.clone())?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
