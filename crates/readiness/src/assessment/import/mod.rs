mod parser;

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::catalog::QuestionBank;
use super::domain::{SectionId, UnknownSection};
use super::session::AssessmentSession;

#[derive(Debug)]
pub enum ResponseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Section { row: usize, source: UnknownSection },
}

impl fmt::Display for ResponseImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseImportError::Io(err) => write!(f, "failed to read response export: {err}"),
            ResponseImportError::Csv(err) => write!(f, "invalid response CSV data: {err}"),
            ResponseImportError::Section { row, source } => write!(f, "row {row}: {source}"),
        }
    }
}

impl std::error::Error for ResponseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseImportError::Io(err) => Some(err),
            ResponseImportError::Csv(err) => Some(err),
            ResponseImportError::Section { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ResponseImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ResponseImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Replays a `section,question,answer` CSV export into a fresh session.
pub struct ResponseImporter;

impl ResponseImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        bank: Arc<QuestionBank>,
    ) -> Result<AssessmentSession, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, bank)
    }

    /// Rows apply in file order, so a later row for the same question wins.
    pub fn from_reader<R: Read>(
        reader: R,
        bank: Arc<QuestionBank>,
    ) -> Result<AssessmentSession, ResponseImportError> {
        let mut session = AssessmentSession::new(bank);

        for row in parser::parse_rows(reader)? {
            let section = row
                .section
                .parse::<SectionId>()
                .map_err(|source| ResponseImportError::Section {
                    row: row.row,
                    source,
                })?;

            match row.answer {
                Some(answer) => session.upsert(section, row.question, answer),
                None => debug!(row = row.row, question = %row.question, "skipping blank answer"),
            }
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::AnswerValue;
    use std::io::Cursor;

    fn bank() -> Arc<QuestionBank> {
        Arc::new(QuestionBank::standard())
    }

    #[test]
    fn later_rows_replace_earlier_answers() {
        let csv = "section,question,answer\npsychometric,interest-1,2\npsychometric,interest-1,5\n";
        let session = ResponseImporter::from_reader(Cursor::new(csv), bank()).expect("import");

        assert_eq!(session.responses().len(), 1);
        assert_eq!(
            session.lookup(SectionId::Psychometric, "interest-1"),
            Some(&AnswerValue::Number(5.0))
        );
    }

    #[test]
    fn unknown_sections_report_the_row() {
        let csv = "section,question,answer\nwiscar,will-1,4\nintro,welcome,1\n";
        match ResponseImporter::from_reader(Cursor::new(csv), bank()) {
            Err(ResponseImportError::Section { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source, UnknownSection("intro".to_string()));
            }
            other => panic!("expected section error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn blank_answers_are_not_recorded() {
        let csv = "section,question,answer\ntechnical,logical-1,\n";
        let session = ResponseImporter::from_reader(Cursor::new(csv), bank()).expect("import");
        assert!(session.responses().is_empty());
    }
}
