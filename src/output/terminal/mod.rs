use anyhow::{anyhow, Result};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::game::quiz::definition::OPTION_COUNT;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

const FEEDBACK_CORRECT: &'static str = "⭕ Correct!";
const FEEDBACK_INCORRECT: &'static str = "❌ Not quite...";

#[derive(Clone, Debug)]
pub struct TerminalOutput {
    quiz_root: PathBuf,
}

impl TerminalOutput {
    pub fn new(quiz_root: PathBuf) -> Self {
        TerminalOutput { quiz_root }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            TitleScreen => "🧪 Welcome to the quiz!\nPress enter to pick a quiz, or `q` to quit.".into(),
            QuizList(entries) => {
                let mut text = "Choose a quiz (`b` to go back):".to_owned();
                for (index, entry) in entries.iter().enumerate() {
                    text += &format!("\n  {}. {}", index + 1, entry.name);
                    if let Some(count) = entry.question_count {
                        text += &format!(" ({} questions)", count);
                    }
                    if !entry.description.is_empty() {
                        text += &format!("\n     {}", entry.description);
                    }
                }
                text
            }
            LoadFailed(reason) => format!("⚠️ Could not load the quiz: {}", reason),
            QuizBegins { name, description } => {
                if description.is_empty() {
                    format!("\n📚 {}", name)
                } else {
                    format!("\n📚 {}\n{}", name, description)
                }
            }
            QuestionBegins {
                number,
                total,
                score,
                question,
            } => {
                let mut text = format!(
                    "\nQuestion {} of {} (score: {})\n{}",
                    number, total, score, question.text
                );
                for (index, option) in question.options.iter().enumerate() {
                    text += &format!("\n  {}. {}", index + 1, option);
                }
                text += &format!("\nAnswer with 1-{}.", OPTION_COUNT);
                text
            }
            GuessCorrect(_) => FEEDBACK_CORRECT.into(),
            GuessIncorrect(outcome) => match outcome.correct_option {
                Some(index) => format!("{} The answer was {}.", FEEDBACK_INCORRECT, index + 1),
                None => FEEDBACK_INCORRECT.into(),
            },
            Explanation(explanation) => {
                format!("[Explanation] {}\nPress enter for the next question.", explanation)
            }
            ExplanationImage(path) => format!("🖼️ {}", self.quiz_root.join(path).display()),
            QuizResults(result) => format!(
                "\n{} correct out of {}!\n{}\n`r` to retry, `m` to pick another quiz, `q` to quit.",
                result.score,
                result.total,
                result.tier.get_message()
            ),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }

    fn play_file_audio(&self, path: &Path) -> Result<()> {
        let path = self.quiz_root.join(path);
        if !path.is_file() {
            return Err(anyhow!("Sound effect {:?} not found", path));
        }
        debug!("Playing {:?}", path);
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}
