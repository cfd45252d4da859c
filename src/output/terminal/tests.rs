use super::*;
use crate::game::quiz::results::QuizResult;
use crate::game::quiz::AnswerOutcome;

fn output() -> TerminalOutput {
    TerminalOutput::new(PathBuf::from("quizzes"))
}

#[test]
fn incorrect_guess_names_the_answer() {
    let outcome = AnswerOutcome {
        selected: 0,
        correct_option: Some(2),
        is_correct: false,
    };
    let text = output().interpret_message(&Message::GuessIncorrect(outcome));
    assert!(text.ends_with("The answer was 3."));
}

#[test]
fn results_include_score_and_tier_message() {
    let text = output().interpret_message(&Message::QuizResults(QuizResult::new(3, 5)));
    assert!(text.contains("3 correct out of 5"));
    assert!(text.contains("Nice effort! Try again!"));
}

#[test]
fn missing_sound_is_an_error() {
    assert!(output().play_file_audio(Path::new("missing.mp3")).is_err());
}

#[test]
fn quiz_banner_skips_empty_description() {
    let banner = Message::QuizBegins {
        name: "Biology".to_owned(),
        description: String::new(),
    };
    assert_eq!(output().interpret_message(&banner), "\n📚 Biology");
}
