use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::AnswerValue;

#[derive(Debug)]
pub(crate) struct ResponseRow {
    /// 1-based data row, excluding the header.
    pub(crate) row: usize,
    pub(crate) section: String,
    pub(crate) question: String,
    pub(crate) answer: Option<AnswerValue>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ResponseRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, record) in csv_reader.deserialize::<CsvResponse>().enumerate() {
        let raw = record?;
        rows.push(ResponseRow {
            row: index + 1,
            section: raw.section,
            question: raw.question,
            answer: raw.answer.as_deref().map(parse_answer),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CsvResponse {
    section: String,
    question: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn parse_answer(raw: &str) -> AnswerValue {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => AnswerValue::Number(value),
        _ => AnswerValue::Text(raw.to_string()),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
