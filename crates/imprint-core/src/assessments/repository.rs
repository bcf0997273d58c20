use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentId, AssessmentKind, AssessmentStatus, RespondentRole, ResponseSet,
};

/// Repository record for one assessment instance: which raters have
/// submitted and where the status machine stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub kind: AssessmentKind,
    pub responses: BTreeMap<RespondentRole, ResponseSet>,
    pub status: AssessmentStatus,
}

impl AssessmentRecord {
    pub fn new(assessment_id: AssessmentId, kind: AssessmentKind) -> Self {
        Self {
            assessment_id,
            kind,
            responses: BTreeMap::new(),
            status: AssessmentStatus::Pending,
        }
    }

    /// Status derived from which required raters have submitted.
    /// Single-rater kinds go straight from pending to completed.
    pub fn derived_status(&self) -> AssessmentStatus {
        let required = self.kind.required_roles();
        let completed = required
            .iter()
            .filter(|role| self.responses.contains_key(role))
            .count();

        if completed == 0 {
            AssessmentStatus::Pending
        } else if completed < required.len() {
            AssessmentStatus::AwaitingSecondRater
        } else {
            AssessmentStatus::Completed
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.assessment_id.clone(),
            kind: self.kind,
            kind_label: self.kind.label(),
            status: self.status.label(),
            completed_roles: self.responses.keys().map(|role| role.label()).collect(),
            awaiting_roles: self
                .kind
                .required_roles()
                .iter()
                .filter(|role| !self.responses.contains_key(role))
                .map(|role| role.label())
                .collect(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in
/// isolation; the hosted backend adapter lives with the binary.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook telling the delivery collaborators (mailer, dashboard)
/// that a report can now be rendered.
pub trait ReportNotifier: Send + Sync {
    fn publish(&self, alert: ReportAlert) -> Result<(), NotifyError>;
}

/// Alert payload so routes/tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAlert {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub kind: AssessmentKind,
    pub kind_label: &'static str,
    pub status: &'static str,
    pub completed_roles: Vec<&'static str>,
    pub awaiting_roles: Vec<&'static str>,
}
