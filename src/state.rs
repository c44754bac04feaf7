use serde::{Deserialize, Serialize};

use crate::graph::ScoreGraph;
use crate::palette::PlayerColor;
use crate::roster::PlayerId;
use crate::round::RoundResult;
use crate::views::{HistoryRound, LeaderboardEntry};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    /// Roster editable, game not started.
    Setup,
    /// Rounds 1 through 10 are being played.
    InProgress,
    /// Final round scored; no further input accepted until reset.
    Ended { winner: PlayerId },
}

/// Public view of a registered player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color_index: usize,
    pub color: PlayerColor,
    pub total_score: i32,
    pub rounds: Vec<RoundResult>,
}

/// Final ranking handed to the presentation layer when the game ends.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalStanding {
    pub winner: LeaderboardEntry,
    pub ranking: Vec<LeaderboardEntry>,
}

/// Read-only snapshot with everything a presentation layer needs to render.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    pub phase: GamePhase,
    pub current_round: u8,
    pub can_start: bool,
    pub players: Vec<PlayerView>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub history: Vec<HistoryRound>,
    pub graph: ScoreGraph,
}

impl SessionView {
    /// True while the session is accepting round input.
    pub fn accepts_rounds(&self) -> bool {
        matches!(self.phase, GamePhase::InProgress)
    }
}
