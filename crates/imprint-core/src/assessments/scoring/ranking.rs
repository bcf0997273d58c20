use std::collections::BTreeMap;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{CategoryDefinition, CategoryScore};

/// One entry of a ranked category listing.
#[derive(Debug, Clone, Copy)]
pub struct RankedCategory<'a> {
    pub definition: &'a CategoryDefinition,
    pub score: &'a CategoryScore,
}

/// Rank category scores by percentage, highest first. Ties keep catalog
/// declaration order (the sort is stable over a catalog-ordered listing),
/// so repeated calls on identical input produce identical output.
pub fn rank<'a>(
    catalog: &'a QuestionCatalog,
    scores: &'a BTreeMap<String, CategoryScore>,
) -> Vec<RankedCategory<'a>> {
    let mut ranked: Vec<RankedCategory<'a>> = catalog
        .categories()
        .iter()
        .filter_map(|definition| {
            scores
                .get(&definition.code)
                .map(|score| RankedCategory { definition, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.percentage.cmp(&a.score.percentage));
    ranked
}

/// Highest-scoring `n` entries; a short listing is returned whole.
pub fn top_n<'a>(ranked: &[RankedCategory<'a>], n: usize) -> Vec<RankedCategory<'a>> {
    ranked.iter().take(n).copied().collect()
}

/// Lowest-scoring `n` entries, lowest first.
pub fn bottom_n<'a>(ranked: &[RankedCategory<'a>], n: usize) -> Vec<RankedCategory<'a>> {
    ranked.iter().rev().take(n).copied().collect()
}
