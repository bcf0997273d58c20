use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use imprint_core::assessments::report::views::ClientReport;
use imprint_core::assessments::{
    assessment_router, catalogs, AssessmentKind, AssessmentRepository, AssessmentService,
    RaterSubmission, ReportNotifier, ReportProjector, ScoringEngine, SubmissionGuard,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ReportPreviewRequest {
    pub(crate) kind: AssessmentKind,
    pub(crate) submission: RaterSubmission,
}

pub(crate) fn with_assessment_routes<R, N>(
    service: Arc<AssessmentService<R, N>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/reports/preview",
            axum::routing::post(report_preview_endpoint),
        )
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

/// Stateless scoring: validate and score an inline payload without
/// touching storage. Used by the intake UI for instant previews and by
/// support staff replaying historical payloads.
pub(crate) async fn report_preview_endpoint(
    Json(payload): Json<ReportPreviewRequest>,
) -> Response {
    match preview_report(payload) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

fn preview_report(payload: ReportPreviewRequest) -> Result<ClientReport, String> {
    let ReportPreviewRequest { kind, submission } = payload;

    let catalog = catalogs::catalog_for(kind);
    let scheme = kind.scheme();

    let response = SubmissionGuard::new(catalog, scheme)
        .response_from_submission(submission)
        .map_err(|error| error.to_string())?;
    let result = ScoringEngine::new(catalog, scheme)
        .score(&response)
        .map_err(|error| error.to_string())?;
    let report = ReportProjector::new(catalog, scheme)
        .client_report(&result)
        .map_err(|error| error.to_string())?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use imprint_core::assessments::RespondentRole;
    use std::collections::BTreeMap;

    fn full_submission(kind: AssessmentKind, role: RespondentRole, value: u8) -> RaterSubmission {
        let answers: BTreeMap<u32, u8> = catalogs::catalog_for(kind)
            .questions_for(role)
            .map(|question| (question.id, value))
            .collect();

        RaterSubmission {
            role,
            respondent_name: "Preview Client".to_string(),
            respondent_email: None,
            answers,
            completed_on: None,
        }
    }

    #[tokio::test]
    async fn preview_scores_a_complete_payload() {
        let request = ReportPreviewRequest {
            kind: AssessmentKind::AdhdAdult,
            submission: full_submission(AssessmentKind::AdhdAdult, RespondentRole::Adult, 3),
        };

        let response = report_preview_endpoint(Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["overall"]["percentage"], 75);
        assert_eq!(payload["overall"]["severity"], "severe");
    }

    #[tokio::test]
    async fn preview_rejects_incomplete_payloads() {
        let mut submission =
            full_submission(AssessmentKind::AdhdAdult, RespondentRole::Adult, 2);
        submission.answers.remove(&3);
        let request = ReportPreviewRequest {
            kind: AssessmentKind::AdhdAdult,
            submission,
        };

        let response = report_preview_endpoint(Json(request)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
