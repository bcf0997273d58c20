use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessments::catalog::QuestionCatalog;
use crate::assessments::catalogs;
use crate::assessments::domain::{
    AssessmentId, AssessmentKind, CategoryDefinition, CategoryScore, OverallScore, Question,
    RaterResult, RaterSubmission, RespondentRole, ResponseSet,
};
use crate::assessments::repository::{
    AssessmentRecord, AssessmentRepository, NotifyError, ReportAlert, ReportNotifier,
    RepositoryError,
};
use crate::assessments::router::assessment_router;
use crate::assessments::service::AssessmentService;
use crate::assessments::scoring::ScoringScheme;

pub(super) const FOCUS: &str = "focus";
pub(super) const REGULATION: &str = "regulation";
pub(super) const CAREGIVER_ONLY: &str = "caregiver_only";

/// Catalog with a two-question "Focus" category shared by parent and
/// caregiver, a parent/caregiver "Regulation" pair, and one category only
/// the caregiver can answer.
pub(super) fn observer_catalog() -> QuestionCatalog {
    let categories = vec![
        CategoryDefinition {
            code: FOCUS.to_string(),
            display_name: "Focus".to_string(),
        },
        CategoryDefinition {
            code: REGULATION.to_string(),
            display_name: "Regulation".to_string(),
        },
        CategoryDefinition {
            code: CAREGIVER_ONLY.to_string(),
            display_name: "Classroom Conduct".to_string(),
        },
    ];

    let both = vec![RespondentRole::Parent, RespondentRole::Caregiver];
    let questions = vec![
        Question {
            id: 1,
            category_code: FOCUS.to_string(),
            text: "Loses focus during homework".to_string(),
            eligible_roles: both.clone(),
        },
        Question {
            id: 2,
            category_code: FOCUS.to_string(),
            text: "Abandons games halfway".to_string(),
            eligible_roles: both.clone(),
        },
        Question {
            id: 3,
            category_code: REGULATION.to_string(),
            text: "Melts down over small changes".to_string(),
            eligible_roles: both.clone(),
        },
        Question {
            id: 4,
            category_code: REGULATION.to_string(),
            text: "Calms down quickly after upsets".to_string(),
            eligible_roles: both,
        },
        Question {
            id: 5,
            category_code: CAREGIVER_ONLY.to_string(),
            text: "Disrupts group activities".to_string(),
            eligible_roles: vec![RespondentRole::Caregiver],
        },
    ];

    QuestionCatalog::new(categories, questions).expect("test catalog is valid")
}

pub(super) fn scheme() -> ScoringScheme {
    ScoringScheme::five_point_percentage()
}

pub(super) fn response(
    role: RespondentRole,
    answers: &[(u32, u8)],
) -> ResponseSet {
    ResponseSet {
        role,
        respondent_name: "Sam Whitfield".to_string(),
        respondent_email: Some("sam@example.com".to_string()),
        answers: answers.iter().copied().collect(),
        completed_on: NaiveDate::from_ymd_opt(2026, 4, 2),
    }
}

/// Hand-built rater result for comparison tests; the raw sums are kept
/// consistent with the stated percentages.
pub(super) fn rater_with(
    role: RespondentRole,
    percentages: &[(&str, u8)],
) -> RaterResult {
    let category_scores: BTreeMap<String, CategoryScore> = percentages
        .iter()
        .map(|(code, percentage)| {
            (
                (*code).to_string(),
                CategoryScore {
                    category_code: (*code).to_string(),
                    raw_sum: *percentage as u32,
                    max_possible: 100,
                    percentage: *percentage,
                    question_count: 25,
                },
            )
        })
        .collect();

    let total_raw: u32 = category_scores.values().map(|score| score.raw_sum).sum();
    let max_possible: u32 = category_scores.values().map(|score| score.max_possible).sum();
    let percentage = if max_possible == 0 {
        0
    } else {
        ((total_raw * 200 + max_possible) / (2 * max_possible)) as u8
    };

    RaterResult {
        role,
        respondent_name: "Sam Whitfield".to_string(),
        overall: OverallScore {
            total_raw,
            max_possible,
            percentage,
            question_count: 25 * category_scores.len(),
        },
        category_scores,
    }
}

/// Complete submission for a built-in assessment kind, answering every
/// eligible question with `value`.
pub(super) fn complete_submission(
    kind: AssessmentKind,
    role: RespondentRole,
    value: u8,
) -> RaterSubmission {
    let catalog = catalogs::catalog_for(kind);
    let answers = catalog
        .questions_for(role)
        .map(|question| (question.id, value))
        .collect();

    RaterSubmission {
        role,
        respondent_name: format!("{} rater", role.label()),
        respondent_email: None,
        answers,
        completed_on: NaiveDate::from_ymd_opt(2026, 4, 2),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

pub(super) fn router_with_service(
    service: AssessmentService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ReportAlert>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ReportAlert> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ReportNotifier for MemoryNotifier {
    fn publish(&self, alert: ReportAlert) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
