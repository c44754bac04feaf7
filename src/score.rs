//! Skull King round scoring.
//!
//! Scoring rule:
//!   exact bet of zero    -> 10 * round number
//!   exact bet of n > 0   -> 20 * n
//!   missed bet           -> -10 per trick of difference
//!
//! The zero-bet bonus grows with the round being scored, so the same
//! `(0, 0)` result is worth more later in the game.

use serde::{Deserialize, Serialize};

/// Compute a player's score for one round.
///
/// `round` is the 1-based round being scored. Inputs are assumed to be
/// validated by the caller.
pub fn round_score(bet: u8, tricks_won: u8, round: u8) -> i32 {
    if bet == tricks_won {
        if bet == 0 {
            10 * i32::from(round)
        } else {
            20 * i32::from(bet)
        }
    } else {
        -10 * (i32::from(bet) - i32::from(tricks_won)).abs()
    }
}

/// Tentative result shown while a player's inputs are still being entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePreview {
    pub score: i32,
    pub new_total: i32,
}

/// Formats a score with an explicit sign, e.g. `+20` or `-10`.
pub fn signed(score: i32) -> String {
    if score >= 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}
