use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use imprint_core::assessments::{
    AssessmentId, AssessmentKind, AssessmentRecord, AssessmentRepository, NotifyError,
    ReportAlert, ReportNotifier, RepositoryError, RespondentRole,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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
        if guard.contains_key(&record.assessment_id) {
            guard.insert(record.assessment_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportNotifier {
    events: Arc<Mutex<Vec<ReportAlert>>>,
}

impl ReportNotifier for InMemoryReportNotifier {
    fn publish(&self, alert: ReportAlert) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryReportNotifier {
    pub(crate) fn events(&self) -> Vec<ReportAlert> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_kind(raw: &str) -> Result<AssessmentKind, String> {
    AssessmentKind::from_label(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = AssessmentKind::ordered()
            .into_iter()
            .map(|kind| kind.label())
            .collect();
        format!("unknown assessment kind '{raw}' (expected one of {known:?})")
    })
}

pub(crate) fn parse_role(raw: &str) -> Result<RespondentRole, String> {
    RespondentRole::from_label(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = RespondentRole::ordered()
            .into_iter()
            .map(|role| role.label())
            .collect();
        format!("unknown respondent role '{raw}' (expected one of {known:?})")
    })
}
