//! Import of digitized paper answer sheets. Franchise offices scan intake
//! forms to a `Question ID,Answer` CSV; answers may be numeric or
//! word-labelled and are mapped onto the assessment's scale before the
//! submission guard sees them.

mod normalizer;
mod parser;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use super::domain::{AssessmentKind, RaterSubmission, RespondentRole};

#[derive(Debug)]
pub enum ResponseSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidQuestionId { raw: String },
    UnknownAnswer { question_id: u32, raw: String },
}

impl std::fmt::Display for ResponseSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseSheetImportError::Io(err) => {
                write!(f, "failed to read answer sheet: {}", err)
            }
            ResponseSheetImportError::Csv(err) => {
                write!(f, "invalid answer sheet CSV data: {}", err)
            }
            ResponseSheetImportError::InvalidQuestionId { raw } => {
                write!(f, "'{}' is not a question id", raw)
            }
            ResponseSheetImportError::UnknownAnswer { question_id, raw } => {
                write!(
                    f,
                    "answer '{}' for question {} is not on the assessment's scale",
                    raw, question_id
                )
            }
        }
    }
}

impl std::error::Error for ResponseSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseSheetImportError::Io(err) => Some(err),
            ResponseSheetImportError::Csv(err) => Some(err),
            ResponseSheetImportError::InvalidQuestionId { .. }
            | ResponseSheetImportError::UnknownAnswer { .. } => None,
        }
    }
}

impl From<std::io::Error> for ResponseSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ResponseSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Who filled the sheet in and for which assessment variant.
#[derive(Debug, Clone)]
pub struct SheetContext {
    pub kind: AssessmentKind,
    pub role: RespondentRole,
    pub respondent_name: String,
    pub respondent_email: Option<String>,
    pub completed_on: Option<NaiveDate>,
}

pub struct ResponseSheetImporter;

impl ResponseSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        context: SheetContext,
    ) -> Result<RaterSubmission, ResponseSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, context)
    }

    /// Parse a sheet into a raw submission. The first row wins when a
    /// question id is duplicated (re-scanned pages repeat rows); validation
    /// against the catalog is the submission guard's job, not the
    /// importer's.
    pub fn from_reader<R: Read>(
        reader: R,
        context: SheetContext,
    ) -> Result<RaterSubmission, ResponseSheetImportError> {
        let scheme = context.kind.scheme();
        let mut answers = BTreeMap::new();

        for record in parser::parse_records(reader)? {
            if answers.contains_key(&record.question_id) {
                continue;
            }

            match normalizer::answer_value(&record.answer_token, scheme) {
                Some(value) => {
                    answers.insert(record.question_id, value);
                }
                None => {
                    return Err(ResponseSheetImportError::UnknownAnswer {
                        question_id: record.question_id,
                        raw: record.answer_token,
                    });
                }
            }
        }

        Ok(RaterSubmission {
            role: context.role,
            respondent_name: context.respondent_name,
            respondent_email: context.respondent_email,
            answers,
            completed_on: context.completed_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn context(kind: AssessmentKind, role: RespondentRole) -> SheetContext {
        SheetContext {
            kind,
            role,
            respondent_name: "Jordan Avery".to_string(),
            respondent_email: Some("jordan@example.com".to_string()),
            completed_on: NaiveDate::from_ymd_opt(2026, 3, 14),
        }
    }

    #[test]
    fn normalize_strips_bom_and_collapses_whitespace() {
        let normalized = normalizer::normalize_for_tests("\u{feff}Very   Often ");
        assert_eq!(normalized, "very often");
    }

    #[test]
    fn imports_word_labels_on_the_raw_mean_scale() {
        let csv = "Question ID,Answer\n1,Never\n2,Occasionally\n3,Often\n4,Very Often\n";
        let submission = ResponseSheetImporter::from_reader(
            Cursor::new(csv),
            context(AssessmentKind::AdhdChild, RespondentRole::Parent),
        )
        .expect("sheet imports");

        assert_eq!(submission.answers.get(&1), Some(&1));
        assert_eq!(submission.answers.get(&2), Some(&2));
        assert_eq!(submission.answers.get(&3), Some(&3));
        assert_eq!(submission.answers.get(&4), Some(&4));
    }

    #[test]
    fn imports_numeric_answers_on_the_percentage_scale() {
        let csv = "Question ID,Answer\n1,0\n2,4\n";
        let submission = ResponseSheetImporter::from_reader(
            Cursor::new(csv),
            context(AssessmentKind::NeuralImprint, RespondentRole::Adult),
        )
        .expect("sheet imports");

        assert_eq!(submission.answers.get(&1), Some(&0));
        assert_eq!(submission.answers.get(&2), Some(&4));
    }

    #[test]
    fn first_row_wins_for_duplicated_question_ids() {
        let csv = "Question ID,Answer\n7,Often\n7,Never\n";
        let submission = ResponseSheetImporter::from_reader(
            Cursor::new(csv),
            context(AssessmentKind::AdhdTeen, RespondentRole::Teen),
        )
        .expect("sheet imports");

        assert_eq!(submission.answers.get(&7), Some(&3));
    }

    #[test]
    fn rejects_answers_outside_the_scale() {
        let csv = "Question ID,Answer\n1,7\n";
        let error = ResponseSheetImporter::from_reader(
            Cursor::new(csv),
            context(AssessmentKind::NeuralImprint, RespondentRole::Adult),
        )
        .expect_err("expected out-of-scale answer to fail");

        match error {
            ResponseSheetImportError::UnknownAnswer { question_id, .. } => {
                assert_eq!(question_id, 1);
            }
            other => panic!("expected unknown answer error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_question_ids() {
        let csv = "Question ID,Answer\nQ-1,Never\n";
        let error = ResponseSheetImporter::from_reader(
            Cursor::new(csv),
            context(AssessmentKind::AdhdChild, RespondentRole::Parent),
        )
        .expect_err("expected bad question id to fail");

        match error {
            ResponseSheetImportError::InvalidQuestionId { raw } => assert_eq!(raw, "Q-1"),
            other => panic!("expected invalid question id error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = ResponseSheetImporter::from_path(
            "./does-not-exist.csv",
            context(AssessmentKind::AdhdChild, RespondentRole::Parent),
        )
        .expect_err("expected io error");

        match error {
            ResponseSheetImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
