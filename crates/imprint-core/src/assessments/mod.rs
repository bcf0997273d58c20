//! Assessment scoring, multi-rater aggregation, and report projection.
//!
//! Everything here is a pure transformation over in-memory values: the
//! engine never reads storage, never logs, and never retains data between
//! invocations. The service and router at the bottom of the module are the
//! seams where the engine meets the storage and delivery collaborators.

pub mod catalog;
pub mod catalogs;
pub mod comparison;
pub mod domain;
pub mod guard;
pub mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use comparison::{combine, AgreementLevel, ComparisonBundle, ComparisonError, ComparisonResult};
pub use domain::{
    AssessmentId, AssessmentKind, AssessmentStatus, CategoryDefinition, CategoryScore,
    OverallScore, Question, RaterResult, RaterSubmission, RespondentRole, ResponseSet,
};
pub use guard::{SubmissionGuard, SubmissionViolation};
pub use intake::{ResponseSheetImportError, ResponseSheetImporter, SheetContext};
pub use report::ReportProjector;
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, NotifyError, ReportAlert,
    ReportNotifier, RepositoryError,
};
pub use router::assessment_router;
pub use scoring::{
    classify_percentage, classify_raw_mean, BandScale, ClassificationError, ScoringEngine,
    ScoringError, ScoringScheme, Severity,
};
pub use service::{AssessmentService, AssessmentServiceError};
