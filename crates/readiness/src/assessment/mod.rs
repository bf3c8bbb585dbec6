//! Response capture and readiness scoring for the Healthcare Data Analyst assessment.
//!
//! A [`AssessmentSession`] owns one respondent's answers and the last [`ScoreReport`]. The
//! [`AssessmentService`] hosts many sessions behind a [`SessionRepository`] for the HTTP router.

pub mod catalog;
pub mod domain;
pub mod import;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{QuestionBank, QuestionDefinition, QuestionKind};
pub use domain::{
    Answer, AnswerValue, Dimension, QuestionId, ScorerFamily, SectionId, SessionId,
    UnknownSection,
};
pub use import::{ResponseImportError, ResponseImporter};
pub use report::{ReadinessInsights, ScoreBand};
pub use repository::{RepositoryError, SessionRecord, SessionRepository, SessionStatusView};
pub use router::assessment_router;
pub use scoring::{Recommendation, ScoreReport, ScoringEngine};
pub use service::{AssessmentService, AssessmentServiceError, ResponseSubmission};
pub use session::AssessmentSession;
pub use store::ResponseStore;
