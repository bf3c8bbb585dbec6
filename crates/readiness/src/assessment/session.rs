use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::QuestionBank;
use super::domain::{AnswerValue, QuestionId, SectionId};
use super::scoring::{ScoreReport, ScoringEngine};
use super::store::ResponseStore;

/// One respondent's pass through the questionnaire.
///
/// Owns the answer set and the last computed report. Nothing here fails: malformed answers
/// are kept as-is and coerced by the scorers.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    engine: ScoringEngine,
    store: ResponseStore,
    report: Option<ScoreReport>,
}

impl AssessmentSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            engine: ScoringEngine::new(),
            store: ResponseStore::new(),
            report: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionBank::standard()))
    }

    /// Records an answer, replacing any earlier answer to the same question.
    ///
    /// Dimensions are resolved here, once, from the question bank.
    pub fn upsert(
        &mut self,
        section: SectionId,
        question_id: impl Into<QuestionId>,
        answer: AnswerValue,
    ) {
        let question_id = question_id.into();
        let dimensions = self.bank.resolve_dimensions(section, question_id.as_str());
        debug!(%section, question = %question_id, ?dimensions, "recorded answer");
        self.store.upsert(section, question_id, dimensions, answer);
    }

    pub fn lookup(&self, section: SectionId, question_id: &str) -> Option<&AnswerValue> {
        self.store.lookup(section, question_id)
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    /// Scores the current answers and keeps the report until the next calculation or reset.
    pub fn calculate(&mut self) -> &ScoreReport {
        let report = self.engine.score(&self.store);
        info!(
            answers = self.store.len(),
            complete = self.store.is_complete(),
            confidence = report.confidence,
            recommendation = report.recommendation.as_str(),
            "calculated readiness scores"
        );
        self.report.insert(report)
    }

    pub fn score_report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Discards every answer and the report by starting over with a fresh session.
    pub fn reset(&mut self) {
        let answered = self.store.len();
        *self = Self::new(Arc::clone(&self.bank));
        info!(discarded = answered, "assessment session reset");
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.store
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::standard()
    }
}
