//! The deterministic scoring pipeline: one parameterized engine reduces a
//! rater's answers to category and overall scores; severity and ranking are
//! recomputed from those scores on demand.

mod calculator;
mod ranking;
mod scheme;
mod severity;

pub use calculator::{category_scores, overall_score};
pub use ranking::{bottom_n, rank, top_n, RankedCategory};
pub use scheme::{BandScale, ScoringScheme};
pub use severity::{classify_percentage, classify_raw_mean, ClassificationError, Severity};

use super::catalog::QuestionCatalog;
use super::domain::{RaterResult, ResponseSet};

/// Raised when a response set cannot be scored at all.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("role '{role}' has no eligible questions in this catalog")]
    NoEligibleQuestions { role: &'static str },
}

/// Stateless scorer binding a catalog to the scheme its answers use. Every
/// call is a pure function of its inputs; identical inputs produce
/// bit-identical results.
pub struct ScoringEngine<'a> {
    catalog: &'a QuestionCatalog,
    scheme: ScoringScheme,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog, scheme: ScoringScheme) -> Self {
        Self { catalog, scheme }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.catalog
    }

    pub fn scheme(&self) -> ScoringScheme {
        self.scheme
    }

    /// Score one rater's complete response set.
    pub fn score(&self, response: &ResponseSet) -> Result<RaterResult, ScoringError> {
        if self.catalog.questions_for(response.role).next().is_none() {
            return Err(ScoringError::NoEligibleQuestions {
                role: response.role.label(),
            });
        }

        Ok(RaterResult {
            role: response.role,
            respondent_name: response.respondent_name.clone(),
            category_scores: calculator::category_scores(self.catalog, self.scheme, response),
            overall: calculator::overall_score(self.catalog, self.scheme, response),
        })
    }
}
