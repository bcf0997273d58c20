use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::catalogs;
use super::comparison::{self, ComparisonError};
use super::domain::{
    AssessmentId, AssessmentKind, AssessmentStatus, RaterSubmission, RespondentRole,
};
use super::guard::{SubmissionGuard, SubmissionViolation};
use super::report::views::{ClientReport, ComparisonReport};
use super::report::ReportProjector;
use super::repository::{
    AssessmentRecord, AssessmentRepository, NotifyError, ReportAlert, ReportNotifier,
    RepositoryError,
};
use super::scoring::{ClassificationError, ScoringEngine, ScoringError};

/// Service composing the submission guard, scoring engine, repository, and
/// report notifier. Reports are recomputed from stored answers on every
/// request; the engine retains nothing between calls.
pub struct AssessmentService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R, N> AssessmentService<R, N>
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Open a new assessment instance of the given kind.
    pub fn create(
        &self,
        kind: AssessmentKind,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = AssessmentRecord::new(next_assessment_id(), kind);
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Accept one rater's completed answers and advance the status machine.
    pub fn submit_response(
        &self,
        assessment_id: &AssessmentId,
        submission: RaterSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let role = submission.role;
        if !record.kind.required_roles().contains(&role) {
            return Err(AssessmentServiceError::RoleNotExpected {
                role: role.label(),
                kind: record.kind.label(),
            });
        }
        if record.responses.contains_key(&role) {
            return Err(AssessmentServiceError::AlreadySubmitted { role: role.label() });
        }

        let catalog = catalogs::catalog_for(record.kind);
        let guard = SubmissionGuard::new(catalog, record.kind.scheme());
        let response = guard.response_from_submission(submission)?;

        record.responses.insert(role, response);
        record.status = record.derived_status();
        self.repository.update(record.clone())?;

        match record.status {
            AssessmentStatus::Completed if record.kind.is_multi_rater() => {
                self.notify(&record, "comparison_report_ready")?;
            }
            AssessmentStatus::Completed | AssessmentStatus::AwaitingSecondRater => {
                self.notify(&record, "client_report_ready")?;
            }
            AssessmentStatus::Pending => {}
        }

        Ok(record)
    }

    /// Fetch the current record for status views.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Recompute one rater's report on demand.
    pub fn client_report(
        &self,
        assessment_id: &AssessmentId,
        role: RespondentRole,
    ) -> Result<ClientReport, AssessmentServiceError> {
        let record = self.get(assessment_id)?;
        let response = record
            .responses
            .get(&role)
            .ok_or(AssessmentServiceError::ResponseMissing { role: role.label() })?;

        let catalog = catalogs::catalog_for(record.kind);
        let scheme = record.kind.scheme();
        let result = ScoringEngine::new(catalog, scheme).score(response)?;
        let report = ReportProjector::new(catalog, scheme).client_report(&result)?;
        Ok(report)
    }

    /// Recompute the dual-rater comparison; only available once every
    /// required rater has submitted, which the persisted status gates.
    pub fn comparison_report(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<ComparisonReport, AssessmentServiceError> {
        let record = self.get(assessment_id)?;
        if !record.kind.is_multi_rater() {
            return Err(AssessmentServiceError::NotMultiRater {
                kind: record.kind.label(),
            });
        }
        if record.status != AssessmentStatus::Completed {
            return Err(AssessmentServiceError::ComparisonNotReady {
                status: record.status.label(),
            });
        }

        let catalog = catalogs::catalog_for(record.kind);
        let scheme = record.kind.scheme();
        let engine = ScoringEngine::new(catalog, scheme);

        let mut scored = Vec::with_capacity(record.kind.required_roles().len());
        for role in record.kind.required_roles() {
            let response = record
                .responses
                .get(role)
                .ok_or(AssessmentServiceError::ResponseMissing { role: role.label() })?;
            scored.push(engine.score(response)?);
        }

        let mut scored = scored.into_iter();
        let bundle = match (scored.next(), scored.next()) {
            (Some(first), Some(second)) => comparison::combine(first, second)?,
            _ => {
                return Err(AssessmentServiceError::ComparisonNotReady {
                    status: record.status.label(),
                })
            }
        };

        let report = ReportProjector::new(catalog, scheme).comparison_report(&bundle)?;
        Ok(report)
    }

    fn notify(&self, record: &AssessmentRecord, template: &str) -> Result<(), NotifyError> {
        let mut details = BTreeMap::new();
        details.insert("kind".to_string(), record.kind.label().to_string());
        details.insert("status".to_string(), record.status.label().to_string());

        self.notifier.publish(ReportAlert {
            template: template.to_string(),
            assessment_id: record.assessment_id.clone(),
            details,
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionViolation),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("role '{role}' is not a rater for {kind} assessments")]
    RoleNotExpected {
        role: &'static str,
        kind: &'static str,
    },
    #[error("role '{role}' has already submitted answers")]
    AlreadySubmitted { role: &'static str },
    #[error("no response on file for role '{role}'")]
    ResponseMissing { role: &'static str },
    #[error("{kind} assessments have a single rater; no comparison exists")]
    NotMultiRater { kind: &'static str },
    #[error("comparison unavailable while status is '{status}'")]
    ComparisonNotReady { status: &'static str },
}
