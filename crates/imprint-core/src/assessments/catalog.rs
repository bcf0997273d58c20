use std::collections::BTreeSet;

use super::domain::{CategoryDefinition, Question, RespondentRole};

/// Errors raised while assembling a catalog from its definitions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate question id {0}")]
    DuplicateQuestionId(u32),
    #[error("duplicate category code '{0}'")]
    DuplicateCategory(String),
    #[error("question {question_id} references unknown category '{code}'")]
    UnknownCategory { question_id: u32, code: String },
    #[error("question {0} lists no eligible roles")]
    NoEligibleRoles(u32),
    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
}

/// Immutable, validated registry of questions and the patterns they
/// measure. Built once at startup and passed by reference to every engine
/// call; there are no module-level mutable question tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    categories: Vec<CategoryDefinition>,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(
        categories: Vec<CategoryDefinition>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        let mut codes = BTreeSet::new();
        for category in &categories {
            if !codes.insert(category.code.clone()) {
                return Err(CatalogError::DuplicateCategory(category.code.clone()));
            }
        }

        let mut ids = BTreeSet::new();
        let mut populated = BTreeSet::new();
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id));
            }
            if !codes.contains(&question.category_code) {
                return Err(CatalogError::UnknownCategory {
                    question_id: question.id,
                    code: question.category_code.clone(),
                });
            }
            if question.eligible_roles.is_empty() {
                return Err(CatalogError::NoEligibleRoles(question.id));
            }
            populated.insert(question.category_code.clone());
        }

        for category in &categories {
            if !populated.contains(&category.code) {
                return Err(CatalogError::EmptyCategory(category.code.clone()));
            }
        }

        Ok(Self {
            categories,
            questions,
        })
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category(&self, code: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|category| category.code == code)
    }

    /// Every question, in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions eligible to `role`, preserving declaration order (the
    /// intake UI presents them sequentially and numbers its progress bar
    /// from this ordering). A role with nothing to answer yields an empty
    /// iterator rather than an error.
    pub fn questions_for(
        &self,
        role: RespondentRole,
    ) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.eligible_for(role))
    }

    pub fn question_count_for(&self, role: RespondentRole) -> usize {
        self.questions_for(role).count()
    }
}
