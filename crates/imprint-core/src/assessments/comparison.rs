//! Multi-rater combination: averaging two independent raters over the same
//! category set and classifying how closely they agree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CategoryScore, RaterResult};

/// Discrepancy (absolute percentage gap) below which two raters read as
/// consistent.
pub const CONSISTENT_BELOW: u8 = 15;
/// Gap below which a difference is moderate rather than significant.
pub const MODERATE_BELOW: u8 = 30;
/// Agreement is only surfaced when at least one rater scored the category
/// at or above this level.
pub const AGREEMENT_FLOOR: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementLevel {
    Consistent,
    ModerateDifference,
    SignificantDifference,
}

impl AgreementLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consistent => "Consistent",
            Self::ModerateDifference => "Moderate Difference",
            Self::SignificantDifference => "Significant Difference",
        }
    }

    /// Classify an absolute percentage gap between two raters.
    pub fn from_discrepancy(discrepancy: u8) -> Self {
        if discrepancy < CONSISTENT_BELOW {
            Self::Consistent
        } else if discrepancy < MODERATE_BELOW {
            Self::ModerateDifference
        } else {
            Self::SignificantDifference
        }
    }
}

/// Combined and compared scores for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub category_code: String,
    pub score_a: CategoryScore,
    pub score_b: CategoryScore,
    pub combined_percentage: u8,
    pub discrepancy: u8,
    pub agreement: AgreementLevel,
}

/// Raised when two results were not scored against the same category set.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error(
        "rater results cover different category sets (only in first: {only_in_a:?}, only in second: {only_in_b:?})"
    )]
    CategoryMismatch {
        only_in_a: Vec<String>,
        only_in_b: Vec<String>,
    },
}

/// Both raters' results together with their per-category comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBundle {
    pub rater_a: RaterResult,
    pub rater_b: RaterResult,
    pub comparisons: BTreeMap<String, ComparisonResult>,
    pub combined_overall_percentage: u8,
}

/// Round-half-up mean of two integer percentages. Symmetric in its inputs.
fn combined_percentage(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}

/// Combine two independently scored rater results over the same catalog.
///
/// The calculator emits a score for every catalog category, so two results
/// scored against the same catalog always carry identical key sets; a
/// mismatch means the results came from different catalogs and the
/// comparison would be meaningless. "No data from one side" is therefore
/// never silently treated as a zero score.
pub fn combine(
    rater_a: RaterResult,
    rater_b: RaterResult,
) -> Result<ComparisonBundle, ComparisonError> {
    let only_in_a: Vec<String> = rater_a
        .category_scores
        .keys()
        .filter(|code| !rater_b.category_scores.contains_key(*code))
        .cloned()
        .collect();
    let only_in_b: Vec<String> = rater_b
        .category_scores
        .keys()
        .filter(|code| !rater_a.category_scores.contains_key(*code))
        .cloned()
        .collect();
    if !only_in_a.is_empty() || !only_in_b.is_empty() {
        return Err(ComparisonError::CategoryMismatch {
            only_in_a,
            only_in_b,
        });
    }

    let mut comparisons = BTreeMap::new();
    for (code, score_a) in &rater_a.category_scores {
        let score_b = &rater_b.category_scores[code];
        let discrepancy = score_a.percentage.abs_diff(score_b.percentage);

        comparisons.insert(
            code.clone(),
            ComparisonResult {
                category_code: code.clone(),
                score_a: score_a.clone(),
                score_b: score_b.clone(),
                combined_percentage: combined_percentage(score_a.percentage, score_b.percentage),
                discrepancy,
                agreement: AgreementLevel::from_discrepancy(discrepancy),
            },
        );
    }

    let combined_overall_percentage =
        combined_percentage(rater_a.overall.percentage, rater_b.overall.percentage);

    Ok(ComparisonBundle {
        rater_a,
        rater_b,
        comparisons,
        combined_overall_percentage,
    })
}

impl ComparisonBundle {
    /// Categories both raters agree on at an elevated level. Agreement on
    /// an unremarkable score is not noteworthy, so the filter also requires
    /// one side at or above the agreement floor.
    pub fn areas_of_agreement(&self) -> Vec<&ComparisonResult> {
        self.comparisons
            .values()
            .filter(|result| {
                result.agreement == AgreementLevel::Consistent
                    && result.score_a.percentage.max(result.score_b.percentage) >= AGREEMENT_FLOOR
            })
            .collect()
    }

    /// Categories where the raters disagree sharply.
    pub fn areas_of_discrepancy(&self) -> Vec<&ComparisonResult> {
        self.comparisons
            .values()
            .filter(|result| result.agreement == AgreementLevel::SignificantDifference)
            .collect()
    }
}
