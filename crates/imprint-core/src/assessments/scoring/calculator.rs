use std::collections::BTreeMap;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{CategoryScore, OverallScore, ResponseSet};
use super::scheme::ScoringScheme;

/// Integer percentage with round-half-up, guarded against empty
/// denominators (categories with no eligible questions score zero).
pub(crate) fn ratio_percentage(raw_sum: u32, max_possible: u32) -> u8 {
    if max_possible == 0 {
        return 0;
    }
    ((raw_sum * 200 + max_possible) / (2 * max_possible)) as u8
}

/// Reduce a response set to one score per catalog category.
///
/// Every catalog category gets an entry. The denominator counts every
/// question eligible to the responding role at the scheme's per-question
/// maximum; the numerator sums the answered values (submission is gated on
/// completeness upstream, so in the steady state the two cover the same
/// question set). Answers keyed by questions outside the role's eligible
/// set are skipped.
pub fn category_scores(
    catalog: &QuestionCatalog,
    scheme: ScoringScheme,
    response: &ResponseSet,
) -> BTreeMap<String, CategoryScore> {
    let mut scores: BTreeMap<String, CategoryScore> = catalog
        .categories()
        .iter()
        .map(|category| {
            (
                category.code.clone(),
                CategoryScore {
                    category_code: category.code.clone(),
                    raw_sum: 0,
                    max_possible: 0,
                    percentage: 0,
                    question_count: 0,
                },
            )
        })
        .collect();

    for question in catalog.questions_for(response.role) {
        if let Some(score) = scores.get_mut(&question.category_code) {
            score.question_count += 1;
            score.max_possible += scheme.answer_max as u32;
            if let Some(value) = response.answers.get(&question.id) {
                score.raw_sum += *value as u32;
            }
        }
    }

    for score in scores.values_mut() {
        score.percentage = ratio_percentage(score.raw_sum, score.max_possible);
    }

    scores
}

/// Reduce a response set across every eligible question regardless of
/// category.
pub fn overall_score(
    catalog: &QuestionCatalog,
    scheme: ScoringScheme,
    response: &ResponseSet,
) -> OverallScore {
    let mut total_raw = 0u32;
    let mut question_count = 0usize;

    for question in catalog.questions_for(response.role) {
        question_count += 1;
        if let Some(value) = response.answers.get(&question.id) {
            total_raw += *value as u32;
        }
    }

    let max_possible = question_count as u32 * scheme.answer_max as u32;

    OverallScore {
        total_raw,
        max_possible,
        percentage: ratio_percentage(total_raw, max_possible),
        question_count,
    }
}
