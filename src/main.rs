use anyhow::{Context, Result};
use futures::executor::block_on;
use log::{error, info, warn};
use std::io::{self, BufRead};

mod config;
mod error;
mod game;
mod media;
mod output;

use crate::config::Settings;
use crate::game::catalog::Catalog;
use crate::game::{Action, Game};
use crate::media::FsProbe;
use crate::output::terminal::TerminalOutput;
use crate::output::GameOutput;

fn parse_action<O: GameOutput>(game: &Game<O>, command: &str) -> Option<Action> {
    let number = command.parse::<usize>().ok().filter(|n| *n > 0).map(|n| n - 1);

    if game.is_on_title() {
        return match command {
            "" | "s" => Some(Action::Start),
            _ => None,
        };
    }

    if game.is_selecting() {
        return match command {
            "b" => Some(Action::BackToTitle),
            _ => number.map(Action::SelectSet),
        };
    }

    let session = game.get_session()?;
    match command {
        "r" => Some(Action::Retry),
        "m" => Some(Action::Restart),
        "" | "n" if session.is_answered() => Some(Action::Advance),
        _ if !session.is_answered() && !session.is_over() => number.map(Action::SubmitAnswer),
        _ => None,
    }
}

fn run() -> Result<()> {
    let settings = Settings::load().context("Could not load settings")?;
    info!("Serving quizzes from {:?}", settings.quiz_root);

    let catalog = Catalog::load(&settings);
    let output = TerminalOutput::new(settings.quiz_root.clone());
    let probe = FsProbe::new(settings.quiz_root.clone());
    let mut game = Game::new(settings, catalog, output);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        let command = line.trim().to_lowercase();
        if command == "q" {
            break;
        }

        let action = match parse_action(&game, &command) {
            Some(action) => action,
            None => {
                println!("Unrecognized command `{}`", command);
                continue;
            }
        };

        if let Err(e) = game.handle(action) {
            warn!("{:#}", e);
            println!("{}", e);
            continue;
        }

        if let Some(request) = game.media_request() {
            block_on(request.run(&probe));
            game.present_media();
        }
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
