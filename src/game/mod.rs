use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

pub mod catalog;
pub mod quiz;

use crate::config::Settings;
use crate::error::LoadError;
use crate::game::catalog::Catalog;
use crate::game::quiz::assets::*;
use crate::game::quiz::definition::{self, QuestionSet};
use crate::game::quiz::settings::SessionSettings;
use crate::game::quiz::QuizSession;
use crate::media::{ImageResolver, MediaRequest, MediaSlot};
use crate::output::{GameOutput, Message};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Start,
    BackToTitle,
    SelectSet(usize),
    SubmitAnswer(usize),
    Advance,
    Retry,
    Restart,
}

#[derive(Debug)]
enum Phase {
    Title,
    Selection,
    Quiz(QuizSession),
}

impl Phase {
    fn get_name(&self) -> String {
        match self {
            Phase::Title => "title screen".to_owned(),
            Phase::Selection => "quiz list".to_owned(),
            Phase::Quiz(session) => format!(
                "quiz `{}` ({})",
                session.get_set().get_id(),
                session.get_phase().get_name()
            ),
        }
    }
}

pub struct Game<O: GameOutput> {
    current_phase: Phase,
    catalog: Catalog,
    settings: Settings,
    media_slot: MediaSlot,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: Settings, catalog: Catalog, output: O) -> Game<O> {
        let mut game = Game {
            current_phase: Phase::Title,
            catalog,
            settings,
            media_slot: MediaSlot::new(),
            output,
        };
        game.set_current_phase(Phase::Title);
        game
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering game phase: {}", phase.get_name());
        self.media_slot.reset();
        self.current_phase = phase;
        match &self.current_phase {
            Phase::Title => self.output.say(&Message::TitleScreen),
            Phase::Selection => self
                .output
                .say(&Message::QuizList(self.catalog.get_entries().to_vec())),
            Phase::Quiz(session) => {
                let set = session.get_set();
                self.output.say(&Message::QuizBegins {
                    name: set.get_name().unwrap_or_else(|| set.get_id()).to_owned(),
                    description: set.get_description().unwrap_or_default().to_owned(),
                });
                self.announce_progress();
            }
        }
    }

    pub fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Start => self.begin_selection(),
            Action::BackToTitle => self.back_to_title(),
            Action::SelectSet(index) => self.select_set(index),
            Action::SubmitAnswer(index) => self.submit_answer(index),
            Action::Advance => self.advance(),
            Action::Retry => self.retry(),
            Action::Restart => self.restart(),
        }
    }

    fn begin_selection(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Title => {
                self.set_current_phase(Phase::Selection);
                Ok(())
            }
            _ => Err(anyhow!("Cannot open the quiz list outside of the title screen")),
        }
    }

    fn back_to_title(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Selection => {
                self.set_current_phase(Phase::Title);
                Ok(())
            }
            _ => Err(anyhow!("Can only go back to the title screen from the quiz list")),
        }
    }

    fn select_set(&mut self, index: usize) -> Result<()> {
        match self.current_phase {
            Phase::Selection => (),
            _ => return Err(anyhow!("Cannot pick a quiz outside of the quiz list")),
        };

        let entry = self
            .catalog
            .get(index)
            .cloned()
            .with_context(|| format!("There is no quiz number {}", index + 1))?;
        let path = self.settings.get_source_path(&entry.file);

        let set = match self.open_set(&entry.id, &path) {
            Ok(set) => set.with_metadata(&entry.name, &entry.description),
            Err(e) => {
                self.output.say(&Message::LoadFailed(e.to_string()));
                return Err(e).with_context(|| format!("Could not load quiz from {:?}", path));
            }
        };

        let mut session = QuizSession::new(Arc::new(set), SessionSettings::from(&self.settings));
        session.start();
        self.set_current_phase(Phase::Quiz(session));
        Ok(())
    }

    fn open_set(&self, id: &str, path: &Path) -> Result<QuestionSet, LoadError> {
        let set = QuestionSet::open(id, path)?;
        let set = if self.settings.strict_validation {
            definition::strict(set)?
        } else {
            set
        };
        if set.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(set)
    }

    fn submit_answer(&mut self, index: usize) -> Result<()> {
        let session = match &mut self.current_phase {
            Phase::Quiz(session) => session,
            _ => return Err(anyhow!("There is no active question")),
        };

        let outcome = session.submit_answer(index)?;
        let explanation = session
            .current_question()
            .map(|q| q.explanation.clone())
            .unwrap_or_default();

        if outcome.is_correct {
            self.output.play_file_audio(Path::new(SFX_CORRECT)).ok();
            self.output.say(&Message::GuessCorrect(outcome));
        } else {
            self.output.play_file_audio(Path::new(SFX_INCORRECT)).ok();
            self.output.say(&Message::GuessIncorrect(outcome));
        }
        self.output.say(&Message::Explanation(explanation));
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(session) => {
                let answered = session.get_answered_count();
                session.advance()?;
                debug!(
                    "{} of {} questions answered, score {}",
                    answered,
                    session.get_total(),
                    session.get_score()
                );
            }
            _ => return Err(anyhow!("There is no active question")),
        };
        self.media_slot.reset();
        self.announce_progress();
        Ok(())
    }

    fn retry(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(session) => session.retry(),
            _ => return Err(anyhow!("There is no quiz to retry")),
        };
        self.media_slot.reset();
        self.announce_progress();
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Quiz(_) => {
                self.set_current_phase(Phase::Selection);
                Ok(())
            }
            _ => Err(anyhow!("There is no quiz to leave")),
        }
    }

    fn announce_progress(&self) {
        let session = match &self.current_phase {
            Phase::Quiz(session) => session,
            _ => return,
        };
        if let Some(question) = session.current_question() {
            self.output.say(&Message::QuestionBegins {
                number: session.get_current_index() + 1,
                total: session.get_total(),
                score: session.get_score(),
                question: question.clone(),
            });
        } else {
            match session.result() {
                Ok(result) => self.output.say(&Message::QuizResults(result)),
                Err(e) => warn!("Quiz has neither a question nor results: {}", e),
            }
        }
    }

    /// Lookup for the explanation image of the question that was just
    /// answered. Only meaningful while its feedback is on display.
    pub fn media_request(&self) -> Option<MediaRequest> {
        let session = match &self.current_phase {
            Phase::Quiz(session) if session.is_answered() => session,
            _ => return None,
        };
        let question = session.current_question()?;
        Some(MediaRequest {
            set_id: session.get_set().get_id().to_owned(),
            question_id: question.id,
            ticket: self.media_slot.get_ticket(),
            slot: self.media_slot.clone(),
            resolver: ImageResolver::new(&self.settings, session.get_settings().image_mode),
        })
    }

    /// Shows the explanation image a finished lookup left in the slot.
    pub fn present_media(&self) {
        if let Some(image) = self.media_slot.get_image() {
            self.output.say(&Message::ExplanationImage(image));
        }
    }

    pub fn get_session(&self) -> Option<&QuizSession> {
        match &self.current_phase {
            Phase::Quiz(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_on_title(&self) -> bool {
        match self.current_phase {
            Phase::Title => true,
            _ => false,
        }
    }

    pub fn is_selecting(&self) -> bool {
        match self.current_phase {
            Phase::Selection => true,
            _ => false,
        }
    }
}
