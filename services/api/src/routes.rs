use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use readiness::assessment::{
    assessment_router, AssessmentService, AssessmentSession, QuestionBank, ReadinessInsights,
    ResponseImporter, ScoreReport, SessionRepository,
};
use readiness::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreRequest {
    pub(crate) responses_csv: String,
}

/// Scored session as returned by the one-off endpoint and the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreResponse {
    pub(crate) answered: usize,
    pub(crate) complete: bool,
    pub(crate) report: ScoreReport,
    pub(crate) insights: ReadinessInsights,
}

impl ScoreResponse {
    pub(crate) fn new(session: &AssessmentSession, report: ScoreReport) -> Self {
        Self {
            answered: session.responses().len(),
            complete: session.is_complete(),
            insights: report.insights(),
            report,
        }
    }

    pub(crate) fn from_session(session: &mut AssessmentSession) -> Self {
        let report = *session.calculate();
        Self::new(session, report)
    }
}

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/score", axum::routing::post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let reader = Cursor::new(payload.responses_csv.into_bytes());
    let mut session =
        ResponseImporter::from_reader(reader, Arc::new(QuestionBank::standard()))?;
    Ok(Json(ScoreResponse::from_session(&mut session)))
}
