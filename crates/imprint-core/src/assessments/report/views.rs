use serde::Serialize;

use super::super::comparison::AgreementLevel;
use super::super::domain::RespondentRole;
use super::super::scoring::Severity;

/// Overall score summary attached to every report.
#[derive(Debug, Clone, Serialize)]
pub struct OverallSummary {
    pub percentage: u8,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub color_hex: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReportEntry {
    pub code: String,
    pub name: String,
    pub percentage: u8,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub color_hex: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConcernEntry {
    pub code: String,
    pub name: String,
    pub percentage: u8,
    pub severity: Severity,
    pub narrative: &'static str,
}

/// Flat record consumed by the client and coach report renderers; plain
/// data, no behavior.
#[derive(Debug, Clone, Serialize)]
pub struct ClientReport {
    pub respondent_name: String,
    pub role: RespondentRole,
    pub role_label: &'static str,
    pub overall: OverallSummary,
    pub categories: Vec<CategoryReportEntry>,
    pub top_concerns: Vec<ConcernEntry>,
    pub strengths: Vec<CategoryReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgreementEntry {
    pub code: String,
    pub name: String,
    pub percentage_a: u8,
    pub percentage_b: u8,
    pub combined_percentage: u8,
    pub discrepancy: u8,
    pub agreement: AgreementLevel,
    pub agreement_label: &'static str,
}

/// Comprehensive dual-rater record.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub rater_a: ClientReport,
    pub rater_b: ClientReport,
    pub combined: OverallSummary,
    pub agreements: Vec<AgreementEntry>,
    pub discrepancies: Vec<AgreementEntry>,
}
