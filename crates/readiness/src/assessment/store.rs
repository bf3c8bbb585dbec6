use std::collections::BTreeMap;

use super::domain::{Answer, AnswerValue, Dimension, QuestionId, SectionId};

/// Sections that need at least one answer before a session counts as complete.
pub const REQUIRED_SECTIONS: [SectionId; 3] = SectionId::ALL;

/// Current answer set of one session, keyed by section and question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStore {
    answers: BTreeMap<(SectionId, QuestionId), Answer>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the answer for `(section, question)`. Never fails.
    pub fn upsert(
        &mut self,
        section: SectionId,
        question_id: QuestionId,
        dimensions: Vec<Dimension>,
        answer: AnswerValue,
    ) {
        let key = (section, question_id.clone());
        self.answers.insert(
            key,
            Answer {
                section_id: section,
                question_id,
                dimensions,
                answer,
            },
        );
    }

    pub fn lookup(&self, section: SectionId, question_id: &str) -> Option<&AnswerValue> {
        self.answers
            .get(&(section, QuestionId::from(question_id)))
            .map(|answer| &answer.answer)
    }

    /// True once every required section holds at least one answer.
    ///
    /// A single answer per section is enough; unanswered questions are not checked.
    pub fn is_complete(&self) -> bool {
        REQUIRED_SECTIONS
            .iter()
            .all(|section| self.answers.values().any(|answer| answer.section_id == *section))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn answers_for(&self, dimension: Dimension) -> impl Iterator<Item = &Answer> {
        self.answers
            .values()
            .filter(move |answer| answer.dimensions.contains(&dimension))
    }

    pub fn answered_in(&self, section: SectionId) -> usize {
        self.answers
            .values()
            .filter(|answer| answer.section_id == section)
            .count()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
