//! Interactive game loop: setup, rounds, game end and play-again.
//!
//! All user input goes through one [`EntrySource`], all output through one
//! [`Presenter`].

use tracing::info;

use crate::command::{Command, CommandOutcome};
use crate::error::GameError;
use crate::inputs::{EntrySource, InputReply};
use crate::presenter::Presenter;
use crate::session::{RoundOutcome, Session};

const NAME_PROMPT: &str = "Player name (empty line starts, -N removes player N, q quits): ";

enum Flow {
    Finished,
    NewGame,
    Quit,
}

/// Runs games until the user quits or declines another game.
///
/// `names` seeds the first game's roster; later games prompt for names.
pub fn run_tracker(
    session: &mut Session,
    source: &mut dyn EntrySource,
    presenter: &mut impl Presenter,
    names: &[String],
) -> Result<(), GameError> {
    let mut names = names.to_vec();
    loop {
        if !setup(session, source, presenter, &names)? {
            break;
        }
        names.clear();
        match play_rounds(session, source, presenter)? {
            Flow::Finished => {
                if !source.ask("Play again?") {
                    break;
                }
                session.apply(Command::Reset)?;
            }
            Flow::NewGame => {
                session.apply(Command::Reset)?;
            }
            Flow::Quit => break,
        }
    }
    info!("leaving score tracker");
    Ok(())
}

/// Registers players and starts the game. Returns false if the user quit.
fn setup(
    session: &mut Session,
    source: &mut dyn EntrySource,
    presenter: &mut impl Presenter,
    names: &[String],
) -> Result<bool, GameError> {
    if !names.is_empty() {
        for name in names {
            session.apply(Command::AddPlayer(name.clone()))?;
        }
        session.apply(Command::StartGame)?;
        return Ok(true);
    }

    loop {
        presenter.show(&session.view());
        let Some(line) = source.read_line(NAME_PROMPT) else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        let command = if line.is_empty() {
            Command::StartGame
        } else if let Some(index) = line
            .strip_prefix('-')
            .and_then(|rest| rest.parse::<usize>().ok())
        {
            Command::RemovePlayer(index)
        } else {
            Command::AddPlayer(line)
        };
        match session.apply(command) {
            Ok(CommandOutcome::Started) => return Ok(true),
            Ok(_) => {}
            Err(err) => presenter.notify(&err),
        }
    }
}

fn play_rounds(
    session: &mut Session,
    source: &mut dyn EntrySource,
    presenter: &mut impl Presenter,
) -> Result<Flow, GameError> {
    loop {
        let view = session.view();
        presenter.show(&view);
        if !session.is_active() {
            return Ok(Flow::Finished);
        }
        match source.next_entries(&view) {
            InputReply::Entries(entries) => match session.apply(Command::AdvanceRound(entries)) {
                Ok(CommandOutcome::RoundScored(RoundOutcome::GameEnded(standing))) => {
                    presenter.show(&session.view());
                    presenter.celebrate(&standing);
                    return Ok(Flow::Finished);
                }
                Ok(_) => {}
                Err(err @ GameError::InvalidInput(_)) => presenter.notify(&err),
                Err(err) => return Err(err),
            },
            InputReply::NewGame => {
                if session.can_reset_safely() || source.confirm_reset() {
                    return Ok(Flow::NewGame);
                }
            }
            InputReply::Quit => return Ok(Flow::Quit),
        }
    }
}
