use log::debug;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use std::sync::Arc;

use self::definition::*;
use self::results::*;
use self::settings::*;
use crate::error::{AnswerError, TransitionError};

pub mod assets;
pub mod definition;
pub mod results;
pub mod settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerOutcome {
    pub selected: usize,
    /// Slot to highlight as correct, if the question data points at one.
    pub correct_option: Option<usize>,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    NotStarted,
    InProgress,
    AwaitingAdvance(AnswerOutcome),
    Finished,
}

impl Phase {
    pub fn get_name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "waiting for an answer",
            Phase::AwaitingAdvance(_) => "showing feedback",
            Phase::Finished => "finished",
        }
    }
}

/// One play-through of a question set.
///
/// The session never copies questions: it keeps the set behind an `Arc` and
/// walks it through `order`, which is either the identity or a permutation
/// drawn once per `start`.
#[derive(Debug)]
pub struct QuizSession {
    set: Arc<QuestionSet>,
    settings: SessionSettings,
    order: Vec<usize>,
    current_index: usize,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    pub fn new(set: Arc<QuestionSet>, settings: SessionSettings) -> Self {
        QuizSession {
            order: (0..set.len()).collect(),
            set,
            settings,
            current_index: 0,
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    pub fn start(&mut self) {
        self.start_with_rng(&mut thread_rng());
    }

    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order = (0..self.set.len()).collect();
        if self.settings.shuffle {
            self.order.shuffle(rng);
        }
        self.current_index = 0;
        self.score = 0;
        self.phase = if self.order.is_empty() {
            Phase::Finished
        } else {
            Phase::InProgress
        };
        debug!(
            "Started quiz `{}` with {} questions (shuffle: {})",
            self.set.get_id(),
            self.order.len(),
            self.settings.shuffle
        );
    }

    /// Starts over on the same set, with the same settings.
    pub fn retry(&mut self) {
        self.start();
    }

    pub fn submit_answer(&mut self, option_index: usize) -> Result<AnswerOutcome, AnswerError> {
        if self.phase != Phase::InProgress {
            return Err(self.invalid("submit an answer").into());
        }
        let (question_id, outcome) = {
            let question = self
                .current_question()
                .ok_or_else(|| self.invalid("submit an answer"))?;
            if option_index >= question.options.len() {
                return Err(AnswerError::NoSuchOption {
                    index: option_index,
                    count: question.options.len(),
                });
            }
            let outcome = AnswerOutcome {
                selected: option_index,
                correct_option: question.correct_option(),
                is_correct: question.is_answer_correct(option_index),
            };
            (question.id, outcome)
        };

        if outcome.is_correct {
            self.score += 1;
        }
        self.phase = Phase::AwaitingAdvance(outcome);
        debug!(
            "Question {} answered with option {} (correct: {})",
            question_id, option_index, outcome.is_correct
        );
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            Phase::AwaitingAdvance(_) => {
                self.current_index += 1;
                self.phase = if self.current_index == self.order.len() {
                    Phase::Finished
                } else {
                    Phase::InProgress
                };
                Ok(())
            }
            _ => Err(self.invalid("advance")),
        }
    }

    pub fn result(&self) -> Result<QuizResult, TransitionError> {
        match self.phase {
            Phase::Finished => Ok(QuizResult::new(self.score, self.order.len())),
            _ => Err(self.invalid("show results")),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress | Phase::AwaitingAdvance(_) => self
                .order
                .get(self.current_index)
                .and_then(|i| self.set.get_questions().get(*i)),
            Phase::NotStarted | Phase::Finished => None,
        }
    }

    /// Questions in the order this session presents them.
    #[cfg(test)]
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        let questions = self.set.get_questions();
        self.order.iter().map(move |i| &questions[*i])
    }

    pub fn get_phase(&self) -> Phase {
        self.phase
    }

    pub fn get_set(&self) -> &Arc<QuestionSet> {
        &self.set
    }

    pub fn get_settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn get_current_index(&self) -> usize {
        self.current_index
    }

    pub fn get_score(&self) -> usize {
        self.score
    }

    /// Questions answered so far, including the one whose feedback is shown.
    pub fn get_answered_count(&self) -> usize {
        if self.is_answered() {
            self.current_index + 1
        } else {
            self.current_index
        }
    }

    pub fn get_total(&self) -> usize {
        self.order.len()
    }

    pub fn is_answered(&self) -> bool {
        match self.phase {
            Phase::AwaitingAdvance(_) => true,
            _ => false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn invalid(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            phase: self.phase.get_name(),
        }
    }
}
