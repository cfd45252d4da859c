use log::debug;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

pub mod question;
pub mod row;

pub use question::{Question, RawQuestion, OPTION_COUNT};
pub use row::parse_row;


const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionSet {
    id: String,
    name: Option<String>,
    description: Option<String>,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(id: &str, questions: Vec<Question>) -> Self {
        QuestionSet {
            id: id.to_owned(),
            name: None,
            description: None,
            questions,
        }
    }

    pub fn open(id: &str, source: &Path) -> Result<QuestionSet, LoadError> {
        let text = fs::read_to_string(source).map_err(|e| LoadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let set = QuestionSet::parse(id, &text)?;
        debug!(
            "Loaded {} questions from {:?}",
            set.questions.len(),
            source
        );
        Ok(set)
    }

    /// Parses question data. The first line is a header and is skipped.
    pub fn parse(id: &str, text: &str) -> Result<QuestionSet, LoadError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).trim();

        let mut questions = Vec::new();
        for (index, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let raw_question = RawQuestion {
                line: index + 1,
                columns: parse_row(line),
            };
            questions.push(Question::try_from(raw_question)?);
        }

        Ok(QuestionSet::new(id, questions))
    }

    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_owned());
        self.description = Some(description.to_owned());
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Rejects sets the plain loader accepts: non-positive or duplicate ids and
/// answers pointing outside of the option slots.
pub fn strict(set: QuestionSet) -> Result<QuestionSet, LoadError> {
    let mut seen_ids = HashSet::new();
    for (index, question) in set.questions.iter().enumerate() {
        let position = index + 1;
        if question.id <= 0 {
            return Err(LoadError::Validation {
                position,
                reason: format!("id {} is not positive", question.id),
            });
        }
        if !seen_ids.insert(question.id) {
            return Err(LoadError::Validation {
                position,
                reason: format!("id {} is used more than once", question.id),
            });
        }
        if question.correct_option().is_none() {
            return Err(LoadError::Validation {
                position,
                reason: format!(
                    "correct answer {} is not between 1 and {}",
                    question.correct_option_index.saturating_add(1),
                    OPTION_COUNT
                ),
            });
        }
    }
    Ok(set)
}
