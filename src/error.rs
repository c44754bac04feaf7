use thiserror::Error;

use crate::roster::PlayerId;

/// Errors that can occur when manipulating a scoring session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player name '{0}' already exists")]
    DuplicateName(String),
    #[error("need at least 2 players to start, found {found}")]
    InsufficientPlayers { found: usize },
    #[error("invalid round input: {0}")]
    InvalidInput(#[from] InvalidEntry),
    #[error("roster is frozen once the game has started")]
    RosterFrozen,
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("game has already been started")]
    AlreadyStarted,
    #[error("game has not been started")]
    NotStarted,
    #[error("game is already over")]
    GameOver,
}

/// Details of the first round entry that failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidEntry {
    #[error("expected {expected} entries, received {received}")]
    EntryCount { expected: usize, received: usize },
    #[error("player {player} has no bet")]
    MissingBet { player: PlayerId },
    #[error("player {player} has no tricks won")]
    MissingTricks { player: PlayerId },
    #[error("player {player} bet {value} is outside 0-10")]
    BetOutOfRange { player: PlayerId, value: i64 },
    #[error("player {player} tricks won {value} is outside 0-10")]
    TricksOutOfRange { player: PlayerId, value: i64 },
}
