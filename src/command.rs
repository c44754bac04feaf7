use serde::{Deserialize, Serialize};

use crate::roster::PlayerId;
use crate::round::RoundEntry;
use crate::session::RoundOutcome;

/// Discrete user action sent from the presentation layer to a session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Register a player during setup.
    AddPlayer(String),
    /// Remove the player at the given roster index during setup.
    RemovePlayer(PlayerId),
    /// Freeze the roster and begin round 1.
    StartGame,
    /// Score the current round with one entry per player in roster order.
    AdvanceRound(Vec<RoundEntry>),
    /// Discard all players and history. Callers must honor
    /// [`Session::reset_requires_confirmation`](crate::Session::reset_requires_confirmation)
    /// before sending this.
    Reset,
}

/// Result of a successfully applied [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    PlayerAdded(PlayerId),
    PlayerRemoved(String),
    Started,
    RoundScored(RoundOutcome),
    Reset,
}

impl Command {
    /// Returns true for commands that may only be issued during setup.
    pub fn edits_roster(&self) -> bool {
        matches!(self, Command::AddPlayer(_) | Command::RemovePlayer(_))
    }
}
