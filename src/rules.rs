/// Number of rounds in a game of Skull King.
pub const MAX_ROUNDS: u8 = 10;
/// Highest bet or trick count a player may record in a single round.
pub const MAX_TRICKS: u8 = 10;
/// Minimum roster size required before the game can start.
pub const MIN_PLAYERS: usize = 2;

/// Returns true if `value` is a legal bet or trick count.
#[inline]
pub fn in_trick_range(value: i64) -> bool {
    (0..=i64::from(MAX_TRICKS)).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trick_range_bounds() {
        assert!(in_trick_range(0));
        assert!(in_trick_range(10));
        assert!(!in_trick_range(-1));
        assert!(!in_trick_range(11));
    }
}
