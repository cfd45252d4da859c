use anyhow::Result;
use std::path::Path;

use crate::game::catalog::CatalogEntry;
use crate::game::quiz::definition::Question;
use crate::game::quiz::results::QuizResult;
use crate::game::quiz::AnswerOutcome;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    TitleScreen,
    QuizList(Vec<CatalogEntry>),
    LoadFailed(String),
    QuizBegins {
        name: String,
        description: String,
    },
    QuestionBegins {
        number: usize,
        total: usize,
        score: usize,
        question: Question,
    },
    GuessCorrect(AnswerOutcome),
    GuessIncorrect(AnswerOutcome),
    Explanation(String),
    ExplanationImage(String),
    QuizResults(QuizResult),
}

pub trait GameOutput {
    fn say(&self, message: &Message);

    fn play_file_audio(&self, path: &Path) -> Result<()>;
}
