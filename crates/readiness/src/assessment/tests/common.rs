use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionKind;
use crate::assessment::domain::{AnswerValue, Dimension, SectionId, SessionId};
use crate::assessment::repository::{RepositoryError, SessionRecord, SessionRepository};
use crate::assessment::{assessment_router, AssessmentService, AssessmentSession, QuestionBank};

pub(super) fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

pub(super) fn session() -> AssessmentSession {
    AssessmentSession::new(bank())
}

pub(super) fn question_ids(dimension: Dimension) -> Vec<&'static str> {
    QuestionBank::standard()
        .questions_for_dimension(dimension)
        .into_iter()
        .map(|question| question.id)
        .collect()
}

/// Answers every authored question of `dimension` with `answer`.
pub(super) fn answer_dimension(
    session: &mut AssessmentSession,
    dimension: Dimension,
    answer: AnswerValue,
) {
    for id in question_ids(dimension) {
        session.upsert(dimension.section(), id, answer.clone());
    }
}

/// Top rating on every preference item and the correct option on every knowledge check.
pub(super) fn strong_candidate() -> AssessmentSession {
    let mut session = session();
    let bank = QuestionBank::standard();
    for question in bank.questions() {
        let answer = match question.kind {
            QuestionKind::Knowledge { .. } => AnswerValue::correct(),
            QuestionKind::Likert | QuestionKind::Choice { .. } => AnswerValue::rating(5),
        };
        session.upsert(question.section, question.id, answer);
    }
    session
}

pub(super) fn one_answer_per_section() -> AssessmentSession {
    let mut session = session();
    session.upsert(SectionId::Psychometric, "interest-1", AnswerValue::rating(4));
    session.upsert(SectionId::Technical, "logical-1", AnswerValue::correct());
    session.upsert(SectionId::Wiscar, "will-1", AnswerValue::rating(2));
    session
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), bank());
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
