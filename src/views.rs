//! Leaderboard and round history derived from the roster.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::palette::PlayerColor;
use crate::roster::{PlayerId, Roster};

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position; rank 1 is the current leader.
    pub rank: usize,
    pub player: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub total_score: i32,
}

/// Players ordered by total score, highest first.
///
/// Equal totals keep roster order, so the earliest-added player ranks first
/// among a tie.
pub fn leaderboard(roster: &Roster) -> Vec<LeaderboardEntry> {
    let mut order: Vec<PlayerId> = (0..roster.len()).collect();
    let players = roster.players();
    // `sort_by_key` is stable.
    order.sort_by_key(|&id| Reverse(players[id].total_score()));
    order
        .into_iter()
        .enumerate()
        .map(|(position, id)| {
            let player = &players[id];
            LeaderboardEntry {
                rank: position + 1,
                player: id,
                name: player.name().to_string(),
                color: roster.color_of(player),
                total_score: player.total_score(),
            }
        })
        .collect()
}

/// One player's line within a history round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub player: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub bet: u8,
    pub tricks_won: u8,
    pub score: i32,
    pub hit_bet: bool,
}

/// All results recorded for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRound {
    pub round: u8,
    pub entries: Vec<HistoryEntry>,
}

/// Completed rounds, most recent first. Empty before round 1 is scored.
pub fn history(roster: &Roster, current_round: u8) -> Vec<HistoryRound> {
    (1..current_round)
        .rev()
        .map(|round| {
            let entries = roster
                .players()
                .iter()
                .enumerate()
                .filter_map(|(id, player)| {
                    let result = player.rounds().get(usize::from(round) - 1)?;
                    Some(HistoryEntry {
                        player: id,
                        name: player.name().to_string(),
                        color: roster.color_of(player),
                        bet: result.bet,
                        tricks_won: result.tricks_won,
                        score: result.score,
                        hit_bet: result.hit_bet(),
                    })
                })
                .collect();
            HistoryRound { round, entries }
        })
        .collect()
}
