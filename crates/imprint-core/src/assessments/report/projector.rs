use super::super::catalog::QuestionCatalog;
use super::super::comparison::{ComparisonBundle, ComparisonResult};
use super::super::domain::RaterResult;
use super::super::scoring::{
    self, ClassificationError, RankedCategory, ScoringScheme, Severity,
};
use super::narrative::concern_narrative;
use super::views::{
    AgreementEntry, CategoryReportEntry, ClientReport, ComparisonReport, ConcernEntry,
    OverallSummary,
};

/// Number of elevated patterns highlighted on the first report page.
const TOP_CONCERNS: usize = 3;
/// Number of low-scoring patterns surfaced as strengths.
const STRENGTHS: usize = 3;

/// Reshapes engine output into the flat records the external renderers and
/// mail templates consume. No computation here beyond severity lookup and
/// canned-text selection.
pub struct ReportProjector<'a> {
    catalog: &'a QuestionCatalog,
    scheme: ScoringScheme,
}

impl<'a> ReportProjector<'a> {
    pub fn new(catalog: &'a QuestionCatalog, scheme: ScoringScheme) -> Self {
        Self { catalog, scheme }
    }

    /// Project one rater's scored result into the single-rater report
    /// record.
    pub fn client_report(
        &self,
        result: &RaterResult,
    ) -> Result<ClientReport, ClassificationError> {
        let ranked = scoring::rank(self.catalog, &result.category_scores);

        let mut categories = Vec::with_capacity(ranked.len());
        for entry in &ranked {
            categories.push(self.category_entry(entry)?);
        }

        let mut top_concerns = Vec::new();
        for entry in scoring::top_n(&ranked, TOP_CONCERNS) {
            let severity = self.scheme.classify(entry.score)?;
            top_concerns.push(ConcernEntry {
                code: entry.definition.code.clone(),
                name: entry.definition.display_name.clone(),
                percentage: entry.score.percentage,
                severity,
                narrative: concern_narrative(severity),
            });
        }

        let mut strengths = Vec::new();
        for entry in scoring::bottom_n(&ranked, STRENGTHS) {
            strengths.push(self.category_entry(&entry)?);
        }

        let overall_severity = self.scheme.classify_overall(&result.overall)?;

        Ok(ClientReport {
            respondent_name: result.respondent_name.clone(),
            role: result.role,
            role_label: result.role.label(),
            overall: overall_summary(result.overall.percentage, overall_severity),
            categories,
            top_concerns,
            strengths,
        })
    }

    /// Project a dual-rater bundle into the comprehensive comparison
    /// record.
    pub fn comparison_report(
        &self,
        bundle: &ComparisonBundle,
    ) -> Result<ComparisonReport, ClassificationError> {
        let rater_a = self.client_report(&bundle.rater_a)?;
        let rater_b = self.client_report(&bundle.rater_b)?;

        let combined_severity =
            scoring::classify_percentage(bundle.combined_overall_percentage)?;

        let agreements = bundle
            .areas_of_agreement()
            .into_iter()
            .map(|result| self.agreement_entry(result))
            .collect();
        let discrepancies = bundle
            .areas_of_discrepancy()
            .into_iter()
            .map(|result| self.agreement_entry(result))
            .collect();

        Ok(ComparisonReport {
            rater_a,
            rater_b,
            combined: overall_summary(bundle.combined_overall_percentage, combined_severity),
            agreements,
            discrepancies,
        })
    }

    fn category_entry(
        &self,
        entry: &RankedCategory<'_>,
    ) -> Result<CategoryReportEntry, ClassificationError> {
        let severity = self.scheme.classify(entry.score)?;
        Ok(CategoryReportEntry {
            code: entry.definition.code.clone(),
            name: entry.definition.display_name.clone(),
            percentage: entry.score.percentage,
            severity,
            severity_label: severity.label(),
            color_hex: severity.color_hex(),
        })
    }

    fn agreement_entry(&self, result: &ComparisonResult) -> AgreementEntry {
        let name = self
            .catalog
            .category(&result.category_code)
            .map(|category| category.display_name.clone())
            .unwrap_or_else(|| result.category_code.clone());

        AgreementEntry {
            code: result.category_code.clone(),
            name,
            percentage_a: result.score_a.percentage,
            percentage_b: result.score_b.percentage,
            combined_percentage: result.combined_percentage,
            discrepancy: result.discrepancy,
            agreement: result.agreement,
            agreement_label: result.agreement.label(),
        }
    }
}

fn overall_summary(percentage: u8, severity: Severity) -> OverallSummary {
    OverallSummary {
        percentage,
        severity,
        severity_label: severity.label(),
        color_hex: severity.color_hex(),
    }
}
