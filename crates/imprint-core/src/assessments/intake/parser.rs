use std::io::Read;

use serde::Deserialize;

use super::normalizer::normalize_token;
use super::ResponseSheetImportError;

#[derive(Debug)]
pub(crate) struct SheetRecord {
    pub(crate) question_id: u32,
    pub(crate) answer_token: String,
}

pub(crate) fn parse_records<R: Read>(
    reader: R,
) -> Result<Vec<SheetRecord>, ResponseSheetImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<SheetRow>() {
        let row = record?;
        let id_token = normalize_token(&row.question_id);
        let question_id = id_token.parse::<u32>().map_err(|_| {
            ResponseSheetImportError::InvalidQuestionId {
                raw: row.question_id.clone(),
            }
        })?;

        records.push(SheetRecord {
            question_id,
            answer_token: normalize_token(&row.answer),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Answer")]
    answer: String,
}
