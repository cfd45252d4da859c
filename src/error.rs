use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse catalog {path:?}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Line {line} is missing column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("Line {line}, column {column}: `{value}` is not an integer")]
    InvalidInteger {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("Question set contains no questions")]
    Empty,
    #[error("Question {position}: {reason}")]
    Validation { position: usize, reason: String },
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Cannot {action} while the quiz is {phase}")]
pub struct TransitionError {
    pub action: &'static str,
    pub phase: &'static str,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AnswerError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("There is no option {}, pick one of 1-{}", .index + 1, .count)]
    NoSuchOption { index: usize, count: usize },
}
