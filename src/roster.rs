use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GameError;
use crate::palette::{Palette, PlayerColor};
use crate::round::RoundResult;
use crate::rules::MIN_PLAYERS;

/// Zero-based position of a player within the roster.
pub type PlayerId = usize;

/// A registered player and the rounds they have completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color_index: usize,
    rounds: Vec<RoundResult>,
    total_score: i32,
}

impl Player {
    fn new(name: String, color_index: usize) -> Self {
        Self {
            name,
            color_index,
            rounds: Vec::new(),
            total_score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Palette slot fixed when the player was added.
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// Recomputes the total from the recorded rounds.
    pub fn recomputed_total(&self) -> i32 {
        self.rounds.iter().map(|round| round.score).sum()
    }

    /// Cumulative totals after each round, starting with 0 before round 1.
    pub fn cumulative_scores(&self) -> Vec<i32> {
        let mut running = 0;
        let mut scores = Vec::with_capacity(self.rounds.len() + 1);
        scores.push(running);
        for round in &self.rounds {
            running += round.score;
            scores.push(running);
        }
        scores
    }

    pub(crate) fn record(&mut self, result: RoundResult) {
        self.total_score += result.score;
        self.rounds.push(result);
    }
}

/// Ordered player list with name uniqueness and color assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    palette: Palette,
    frozen: bool,
}

impl Roster {
    pub fn new(palette: Palette) -> Self {
        Self {
            players: Vec::new(),
            palette,
            frozen: false,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color_of(&self, player: &Player) -> PlayerColor {
        self.palette.color(player.color_index)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// True when enough players are registered to begin a game.
    pub fn can_start(&self) -> bool {
        !self.frozen && self.players.len() >= MIN_PLAYERS
    }

    /// Registers a new player at the end of the roster and returns its id.
    ///
    /// The name is trimmed before the uniqueness check, which is an exact,
    /// case-sensitive comparison.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        if self.frozen {
            return Err(GameError::RosterFrozen);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.players.iter().any(|player| player.name == name) {
            return Err(GameError::DuplicateName(name.to_string()));
        }
        let color_index = self.players.len() % self.palette.len();
        self.players.push(Player::new(name.to_string(), color_index));
        debug!(player = name, color_index, roster_size = self.players.len(), "player added");
        Ok(self.players.len() - 1)
    }

    /// Removes the player at `id`. Remaining players keep their color index.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, GameError> {
        if self.frozen {
            return Err(GameError::RosterFrozen);
        }
        if id >= self.players.len() {
            return Err(GameError::InvalidPlayer(id));
        }
        let removed = self.players.remove(id);
        debug!(player = %removed.name, roster_size = self.players.len(), "player removed");
        Ok(removed)
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub(crate) fn clear(&mut self) {
        self.players.clear();
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_color_by_roster_size() {
        let mut roster = Roster::default();
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            roster.add_player(name).expect("add");
        }
        let indices: Vec<usize> = roster.players().iter().map(Player::color_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn remove_does_not_reindex_colors() {
        let mut roster = Roster::default();
        roster.add_player("Anne").expect("add");
        roster.add_player("Bonny").expect("add");
        roster.add_player("Calico").expect("add");
        roster.remove_player(0).expect("remove");
        assert_eq!(roster.players()[0].color_index(), 1);
        assert_eq!(roster.players()[1].color_index(), 2);
        // Next add uses the current size, so it may share a slot with a survivor.
        roster.add_player("Drake").expect("add");
        assert_eq!(roster.players()[2].color_index(), 2);
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        let mut roster = Roster::default();
        assert_eq!(roster.add_player("   "), Err(GameError::EmptyName));
        roster.add_player("Jack").expect("add");
        assert_eq!(
            roster.add_player("Jack"),
            Err(GameError::DuplicateName("Jack".into()))
        );
        // Case-sensitive comparison.
        assert!(roster.add_player("jack").is_ok());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_out_of_range() {
        let mut roster = Roster::default();
        roster.add_player("Jack").expect("add");
        assert!(matches!(roster.remove_player(1), Err(GameError::InvalidPlayer(1))));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn start_availability_tracks_size() {
        let mut roster = Roster::default();
        roster.add_player("a").expect("add");
        assert!(!roster.can_start());
        roster.add_player("b").expect("add");
        assert!(roster.can_start());
        roster.remove_player(1).expect("remove");
        assert!(!roster.can_start());
    }

    #[test]
    fn frozen_roster_rejects_changes() {
        let mut roster = Roster::default();
        roster.add_player("a").expect("add");
        roster.add_player("b").expect("add");
        roster.freeze();
        assert_eq!(roster.add_player("c"), Err(GameError::RosterFrozen));
        assert!(matches!(roster.remove_player(0), Err(GameError::RosterFrozen)));
        assert_eq!(roster.len(), 2);
    }
}
