use lazy_static::lazy_static;
use regex::Regex;

use crate::error::LoadError;

pub const OPTION_COUNT: usize = 4;

const COLUMN_ID: usize = 0;
const COLUMN_TEXT: usize = 1;
const COLUMN_FIRST_OPTION: usize = 2;
const COLUMN_CORRECT_OPTION: usize = 6;
const COLUMN_EXPLANATION: usize = 7;

lazy_static! {
    static ref LEADING_INTEGER_REGEX: Regex = Regex::new(r"^[+-]?\d+").unwrap();
}

/// Reads the integer a column starts with, ignoring anything after it.
fn parse_leading_integer(value: &str, line: usize, column: usize) -> Result<i64, LoadError> {
    LEADING_INTEGER_REGEX
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| LoadError::InvalidInteger {
            line,
            column,
            value: value.to_owned(),
        })
}

/// One parsed data row, columns in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawQuestion {
    pub line: usize,
    pub columns: Vec<String>,
}

impl RawQuestion {
    fn column(&self, index: usize) -> Result<&str, LoadError> {
        self.columns
            .get(index)
            .map(|c| c.as_str())
            .ok_or(LoadError::MissingColumn {
                line: self.line,
                column: index,
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    /// Zero-based. Taken from the data file without range checks.
    pub correct_option_index: i64,
    pub explanation: String,
}

impl Question {
    pub fn is_answer_correct(&self, option_index: usize) -> bool {
        option_index as i64 == self.correct_option_index
    }

    /// The correct option, when the data file points at one of the slots.
    pub fn correct_option(&self) -> Option<usize> {
        if self.correct_option_index >= 0 && (self.correct_option_index as usize) < OPTION_COUNT {
            Some(self.correct_option_index as usize)
        } else {
            None
        }
    }
}

impl std::convert::TryFrom<RawQuestion> for Question {
    type Error = LoadError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let id = parse_leading_integer(raw.column(COLUMN_ID)?, raw.line, COLUMN_ID)?;
        let correct_answer = parse_leading_integer(
            raw.column(COLUMN_CORRECT_OPTION)?,
            raw.line,
            COLUMN_CORRECT_OPTION,
        )?;

        let option = |n: usize| -> Result<String, LoadError> {
            Ok(raw.column(COLUMN_FIRST_OPTION + n)?.to_owned())
        };

        Ok(Question {
            id,
            text: raw.column(COLUMN_TEXT)?.to_owned(),
            options: [option(0)?, option(1)?, option(2)?, option(3)?],
            correct_option_index: correct_answer.saturating_sub(1),
            explanation: raw.column(COLUMN_EXPLANATION)?.to_owned(),
        })
    }
}
