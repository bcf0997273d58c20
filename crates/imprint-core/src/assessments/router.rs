use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentId, AssessmentKind, RaterSubmission, RespondentRole};
use super::repository::{AssessmentRepository, ReportNotifier, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing HTTP endpoints for assessment lifecycle and
/// report retrieval.
pub fn assessment_router<R, N>(service: Arc<AssessmentService<R, N>>) -> Router
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(create_handler::<R, N>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/responses",
            post(submit_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/report/:role",
            get(report_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/comparison",
            get(comparison_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateAssessmentRequest {
    pub(crate) kind: AssessmentKind,
}

pub(crate) async fn create_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(request): axum::Json<CreateAssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    match service.create(request.kind) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
    axum::Json(submission): axum::Json<RaterSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.submit_response(&id, submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(AssessmentServiceError::Submission(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ AssessmentServiceError::RoleNotExpected { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ AssessmentServiceError::AlreadySubmitted { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            not_found(&id)
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn report_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path((assessment_id, role)): Path<(String, String)>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    let role = match RespondentRole::from_label(&role) {
        Some(role) => role,
        None => {
            let payload = json!({ "error": format!("unknown respondent role '{role}'") });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.client_report(&id, role) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(error @ AssessmentServiceError::ResponseMissing { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn comparison_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.comparison_report(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(
            error @ (AssessmentServiceError::ComparisonNotReady { .. }
            | AssessmentServiceError::NotMultiRater { .. }),
        ) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

fn not_found(id: &AssessmentId) -> Response {
    let payload = json!({
        "error": format!("assessment '{}' not found", id.0),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
