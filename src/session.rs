use serde::{Deserialize, Serialize};
use tracing::info;

use crate::command::{Command, CommandOutcome};
use crate::error::GameError;
use crate::graph::ScoreGraph;
use crate::palette::Palette;
use crate::roster::{Player, PlayerId, Roster};
use crate::round::{RoundEntry, score_round};
use crate::rules::{MAX_ROUNDS, MIN_PLAYERS, in_trick_range};
use crate::score::{ScorePreview, round_score};
use crate::state::{FinalStanding, GamePhase, PlayerView, SessionView};
use crate::views::{HistoryRound, LeaderboardEntry, history, leaderboard};

/// What happened after a round was scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Another round follows.
    Continue { next_round: u8 },
    /// The final round was scored; the winner and ranking are attached.
    GameEnded(FinalStanding),
}

/// Builder for sessions with a prepared roster, mainly for tests and CLIs.
pub struct SessionBuilder {
    palette: Palette,
    players: Vec<String>,
    start: bool,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            players: Vec::new(),
            start: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    /// Start the game right after the roster is registered.
    pub fn started(mut self) -> Self {
        self.start = true;
        self
    }

    pub fn build(self) -> Result<Session, GameError> {
        let mut session = Session::with_palette(self.palette);
        for name in &self.players {
            session.add_player(name)?;
        }
        if self.start {
            session.start_game()?;
        }
        Ok(session)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-game scoring session: roster, round counter and lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    roster: Roster,
    current_round: u8,
    phase: GamePhase,
}

impl Session {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            roster: Roster::new(palette),
            current_round: 1,
            phase: GamePhase::Setup,
        }
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// 1-based round awaiting input; `11` once the game has ended.
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// True when the "start game" action should be offered.
    pub fn can_start(&self) -> bool {
        matches!(self.phase, GamePhase::Setup) && self.roster.can_start()
    }

    /// True while round input is accepted.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GamePhase::InProgress)
            && self.roster.len() >= MIN_PLAYERS
            && self.current_round <= MAX_ROUNDS
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Ended { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        if !matches!(self.phase, GamePhase::Setup) {
            return Err(GameError::RosterFrozen);
        }
        self.roster.add_player(name)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, GameError> {
        if !matches!(self.phase, GamePhase::Setup) {
            return Err(GameError::RosterFrozen);
        }
        self.roster.remove_player(id)
    }

    /// Freezes the roster and moves to round 1.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, GamePhase::Setup) {
            return Err(GameError::AlreadyStarted);
        }
        if self.roster.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers {
                found: self.roster.len(),
            });
        }
        self.roster.freeze();
        self.phase = GamePhase::InProgress;
        info!(players = self.roster.len(), "game started");
        Ok(())
    }

    /// Scores the current round for every player and advances the counter.
    ///
    /// Invalid input leaves the session untouched. Scoring round 10 ends the
    /// game and returns the final standing.
    pub fn advance_round(&mut self, entries: &[RoundEntry]) -> Result<RoundOutcome, GameError> {
        match self.phase {
            GamePhase::Setup => return Err(GameError::NotStarted),
            GamePhase::Ended { .. } => return Err(GameError::GameOver),
            GamePhase::InProgress => {}
        }
        // A deserialized session may claim to be in progress with a short roster.
        if self.roster.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers {
                found: self.roster.len(),
            });
        }

        let round = self.current_round;
        score_round(self.roster.players_mut(), round, entries)?;
        self.current_round += 1;
        debug_assert!(
            self.players()
                .iter()
                .all(|p| p.rounds().len() == usize::from(self.current_round) - 1)
        );
        info!(round, "round completed");

        if self.current_round > MAX_ROUNDS {
            let standing = self.final_standing().ok_or(GameError::InsufficientPlayers {
                found: self.roster.len(),
            })?;
            self.phase = GamePhase::Ended {
                winner: standing.winner.player,
            };
            info!(
                winner = %standing.winner.name,
                score = standing.winner.total_score,
                "game ended"
            );
            return Ok(RoundOutcome::GameEnded(standing));
        }
        Ok(RoundOutcome::Continue {
            next_round: self.current_round,
        })
    }

    /// Score the player would receive for `entry` this round, without
    /// recording anything. `None` while either value is missing or out of range.
    pub fn preview_score(
        &self,
        player: PlayerId,
        entry: RoundEntry,
    ) -> Result<Option<ScorePreview>, GameError> {
        let current = self
            .roster
            .get(player)
            .ok_or(GameError::InvalidPlayer(player))?;
        let (Some(bet), Some(tricks_won)) = (entry.bet, entry.tricks_won) else {
            return Ok(None);
        };
        if !in_trick_range(bet) || !in_trick_range(tricks_won) {
            return Ok(None);
        }
        let score = round_score(bet as u8, tricks_won as u8, self.current_round);
        Ok(Some(ScorePreview {
            score,
            new_total: current.total_score() + score,
        }))
    }

    /// Whether a reset would throw away an unfinished game.
    pub fn reset_requires_confirmation(&self) -> bool {
        self.current_round <= MAX_ROUNDS && !self.roster.is_empty()
    }

    pub fn can_reset_safely(&self) -> bool {
        !self.reset_requires_confirmation()
    }

    /// Discards all players and history and returns to setup.
    pub fn reset(&mut self) {
        let discarded_rounds = self.current_round - 1;
        self.roster.clear();
        self.current_round = 1;
        self.phase = GamePhase::Setup;
        info!(discarded_rounds, "session reset");
    }

    /// Applies a [`Command`] from the presentation layer.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        match command {
            Command::AddPlayer(name) => self.add_player(&name).map(CommandOutcome::PlayerAdded),
            Command::RemovePlayer(id) => self
                .remove_player(id)
                .map(|player| CommandOutcome::PlayerRemoved(player.name().to_string())),
            Command::StartGame => self.start_game().map(|()| CommandOutcome::Started),
            Command::AdvanceRound(entries) => self
                .advance_round(&entries)
                .map(CommandOutcome::RoundScored),
            Command::Reset => {
                self.reset();
                Ok(CommandOutcome::Reset)
            }
        }
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard(&self.roster)
    }

    pub fn history(&self) -> Vec<HistoryRound> {
        history(&self.roster, self.current_round)
    }

    pub fn score_graph(&self) -> ScoreGraph {
        ScoreGraph::from_roster(&self.roster, self.current_round)
    }

    /// Winner and full ranking. Ties go to the earliest-added player.
    pub fn final_standing(&self) -> Option<FinalStanding> {
        let ranking = self.leaderboard();
        let winner = ranking.first()?.clone();
        Some(FinalStanding { winner, ranking })
    }

    /// Snapshot of the whole session for rendering.
    pub fn view(&self) -> SessionView {
        let players = self
            .players()
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerView {
                id,
                name: player.name().to_string(),
                color_index: player.color_index(),
                color: self.roster.color_of(player),
                total_score: player.total_score(),
                rounds: player.rounds().to_vec(),
            })
            .collect();
        SessionView {
            phase: self.phase,
            current_round: self.current_round,
            can_start: self.can_start(),
            players,
            leaderboard: self.leaderboard(),
            history: self.history(),
            graph: self.score_graph(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
