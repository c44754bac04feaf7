use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InvalidEntry;
use crate::roster::Player;
use crate::rules::in_trick_range;
use crate::score::round_score;

/// Outcome of one player's round. Immutable once recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round during which the result was recorded.
    pub round: u8,
    pub bet: u8,
    pub tricks_won: u8,
    pub score: i32,
}

impl RoundResult {
    pub fn new(round: u8, bet: u8, tricks_won: u8) -> Self {
        Self {
            round,
            bet,
            tricks_won,
            score: round_score(bet, tricks_won, round),
        }
    }

    /// Whether the bet was hit exactly.
    pub fn hit_bet(&self) -> bool {
        self.bet == self.tricks_won
    }
}

/// Raw bet / tricks-won pair as submitted for one player, before validation.
///
/// A `None` field means the value was left blank or could not be read as an
/// integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub bet: Option<i64>,
    pub tricks_won: Option<i64>,
}

impl RoundEntry {
    pub fn new(bet: i64, tricks_won: i64) -> Self {
        Self {
            bet: Some(bet),
            tricks_won: Some(tricks_won),
        }
    }

    /// Builds an entry from two text fields. Blank or non-integer text is
    /// treated as missing.
    pub fn from_text(bet: &str, tricks_won: &str) -> Self {
        Self {
            bet: parse_field(bet),
            tricks_won: parse_field(tricks_won),
        }
    }

    fn validate(&self, player: usize) -> Result<(u8, u8), InvalidEntry> {
        let bet = self.bet.ok_or(InvalidEntry::MissingBet { player })?;
        let tricks = self
            .tricks_won
            .ok_or(InvalidEntry::MissingTricks { player })?;
        if !in_trick_range(bet) {
            return Err(InvalidEntry::BetOutOfRange { player, value: bet });
        }
        if !in_trick_range(tricks) {
            return Err(InvalidEntry::TricksOutOfRange {
                player,
                value: tricks,
            });
        }
        // Both values are within 0..=10 here.
        Ok((bet as u8, tricks as u8))
    }
}

fn parse_field(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Validates every entry before any player is touched.
pub fn validate_entries(
    entries: &[RoundEntry],
    expected: usize,
) -> Result<Vec<(u8, u8)>, InvalidEntry> {
    if entries.len() != expected {
        return Err(InvalidEntry::EntryCount {
            expected,
            received: entries.len(),
        });
    }
    entries
        .iter()
        .enumerate()
        .map(|(player, entry)| entry.validate(player))
        .collect()
}

/// Scores round `round` for all players in roster order.
///
/// Either every player receives a new [`RoundResult`] or, if any entry is
/// invalid, none does.
pub(crate) fn score_round(
    players: &mut [Player],
    round: u8,
    entries: &[RoundEntry],
) -> Result<(), InvalidEntry> {
    let validated = validate_entries(entries, players.len()).inspect_err(|err| {
        warn!(round, error = %err, "round input rejected");
    })?;
    for (player, (bet, tricks_won)) in players.iter_mut().zip(validated) {
        let result = RoundResult::new(round, bet, tricks_won);
        debug!(
            player = player.name(),
            round,
            bet,
            tricks_won,
            score = result.score,
            "round scored"
        );
        player.record(result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parsing_treats_garbage_as_missing() {
        assert_eq!(RoundEntry::from_text(" 3 ", "2"), RoundEntry::new(3, 2));
        let entry = RoundEntry::from_text("", "2.5");
        assert_eq!(entry.bet, None);
        assert_eq!(entry.tricks_won, None);
    }

    #[test]
    fn validation_reports_first_failure() {
        let entries = [RoundEntry::new(1, 1), RoundEntry::new(11, 0)];
        assert_eq!(
            validate_entries(&entries, 2),
            Err(InvalidEntry::BetOutOfRange {
                player: 1,
                value: 11
            })
        );
        let entries = [RoundEntry::new(1, -1)];
        assert_eq!(
            validate_entries(&entries, 1),
            Err(InvalidEntry::TricksOutOfRange {
                player: 0,
                value: -1
            })
        );
    }

    #[test]
    fn validation_checks_entry_count() {
        let entries = [RoundEntry::new(0, 0)];
        assert_eq!(
            validate_entries(&entries, 3),
            Err(InvalidEntry::EntryCount {
                expected: 3,
                received: 1
            })
        );
    }

    #[test]
    fn missing_values_are_reported() {
        let entries = [RoundEntry {
            bet: None,
            tricks_won: Some(1),
        }];
        assert_eq!(
            validate_entries(&entries, 1),
            Err(InvalidEntry::MissingBet { player: 0 })
        );
        let entries = [RoundEntry {
            bet: Some(1),
            tricks_won: None,
        }];
        assert_eq!(
            validate_entries(&entries, 1),
            Err(InvalidEntry::MissingTricks { player: 0 })
        );
    }

    #[test]
    fn round_result_hit_flag() {
        assert!(RoundResult::new(4, 2, 2).hit_bet());
        assert!(!RoundResult::new(4, 2, 1).hit_bet());
        assert_eq!(RoundResult::new(4, 0, 0).score, 40);
    }
}
