use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::QuestionDefinition;
use super::domain::{AnswerValue, SectionId, SessionId};
use super::report::ReadinessInsights;
use super::repository::{RepositoryError, SessionRepository};
use super::scoring::ScoreReport;
use super::service::{AssessmentService, AssessmentServiceError, ResponseSubmission};

/// Router exposing the question bank, session lifecycle, answer capture and scoring.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(start_handler::<R>))
        .route("/api/v1/questions", get(questions_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<R>).delete(finish_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/responses",
            put(record_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/responses/:section_id/:question_id",
            get(lookup_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/calculate",
            post(calculate_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/report",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/reset",
            post(reset_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupView {
    section_id: SectionId,
    question_id: String,
    answered: bool,
    answer: Option<AnswerValue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportView {
    session_id: SessionId,
    complete: bool,
    report: Option<ScoreReport>,
    insights: Option<ReadinessInsights>,
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> axum::Json<Vec<QuestionDefinition>>
where
    R: SessionRepository + 'static,
{
    axum::Json(service.bank().questions().to_vec())
}

pub(crate) async fn finish_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.finish(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(submission): axum::Json<ResponseSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.record_response(&SessionId(session_id), submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn lookup_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path((session_id, section_id, question_id)): Path<(String, String, String)>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let section = match section_id.parse::<SectionId>() {
        Ok(section) => section,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.lookup(&SessionId(session_id), section, &question_id) {
        Ok(answer) => {
            let view = LookupView {
                section_id: section,
                question_id,
                answered: answer.is_some(),
                answer,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn calculate_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.calculate(&SessionId(session_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => {
            let report = record.session.score_report().copied();
            let view = ReportView {
                session_id: record.session_id,
                complete: record.session.is_complete(),
                insights: report.as_ref().map(ScoreReport::insights),
                report,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::CapacityExceeded(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
