use super::catalog::QuestionCatalog;
use super::domain::{RaterSubmission, ResponseSet};
use super::scoring::ScoringScheme;

/// Validation errors raised before a submission is accepted for scoring.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionViolation {
    #[error("role '{role}' has no eligible questions in this catalog")]
    RoleNotEligible { role: &'static str },
    #[error("eligible questions left unanswered: {missing:?}")]
    IncompleteAnswers { missing: Vec<u32> },
    #[error("answer {value} for question {question_id} is outside the {min}..={max} scale")]
    AnswerOutOfRange {
        question_id: u32,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// Guard converting raw rater submissions into validated response sets.
///
/// The intake UI enforces completeness client-side; this is the
/// server-side authority for the same rule: every question eligible to the
/// submitting role must carry an in-scale answer. Answers for questions
/// outside the role's eligible set are tolerated and passed through
/// untouched (stale clients may send them); the calculator ignores them.
#[derive(Debug, Clone)]
pub struct SubmissionGuard<'a> {
    catalog: &'a QuestionCatalog,
    scheme: ScoringScheme,
}

impl<'a> SubmissionGuard<'a> {
    pub fn new(catalog: &'a QuestionCatalog, scheme: ScoringScheme) -> Self {
        Self { catalog, scheme }
    }

    pub fn response_from_submission(
        &self,
        submission: RaterSubmission,
    ) -> Result<ResponseSet, SubmissionViolation> {
        let mut eligible = 0usize;
        let mut missing = Vec::new();

        for question in self.catalog.questions_for(submission.role) {
            eligible += 1;
            match submission.answers.get(&question.id) {
                Some(value) if !self.scheme.contains(*value) => {
                    return Err(SubmissionViolation::AnswerOutOfRange {
                        question_id: question.id,
                        value: *value,
                        min: self.scheme.answer_min,
                        max: self.scheme.answer_max,
                    });
                }
                Some(_) => {}
                None => missing.push(question.id),
            }
        }

        if eligible == 0 {
            return Err(SubmissionViolation::RoleNotEligible {
                role: submission.role.label(),
            });
        }
        if !missing.is_empty() {
            return Err(SubmissionViolation::IncompleteAnswers { missing });
        }

        Ok(ResponseSet {
            role: submission.role,
            respondent_name: submission.respondent_name,
            respondent_email: submission.respondent_email,
            answers: submission.answers,
            completed_on: submission.completed_on,
        })
    }
}
