use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::service::{AssessmentRequest, CreditAssessmentService, StatementSource};
use crate::error::AppError;
use crate::workflows::scoring::ScoringProfile;
use crate::workflows::statement::StatementSummary;

/// Router builder exposing statement analysis, scoring and the combined assessment.
pub fn assessment_router(service: Arc<CreditAssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/statements/analyze", post(analyze_handler))
        .route("/api/v1/credit/evaluate", post(evaluate_handler))
        .route("/api/v1/credit/assess", post(assess_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    Json(source): Json<StatementSource>,
) -> Result<Json<StatementSummary>, AppError> {
    let summary = service.analyze_statement(&source)?;
    Ok(Json(summary))
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    Json(profile): Json<ScoringProfile>,
) -> Response {
    let result = service.evaluate(&profile);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let outcome = service.assess(request);
    (StatusCode::OK, Json(outcome)).into_response()
}
