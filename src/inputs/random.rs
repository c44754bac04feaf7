use rand::Rng;

use super::{EntrySource, InputReply};
use crate::round::RoundEntry;
use crate::rules::MAX_TRICKS;
use crate::state::SessionView;

/// Generates plausible rounds: in round `r` each of the `r` tricks goes to a
/// random player and every bet is drawn from `0..=r`.
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Entries for `players` players in `round`.
    pub fn deal(&mut self, players: usize, round: u8) -> Vec<RoundEntry> {
        let cards = i64::from(round.min(MAX_TRICKS));
        let mut tricks = vec![0i64; players];
        if players > 0 {
            for _ in 0..cards {
                tricks[self.rng.gen_range(0..players)] += 1;
            }
        }
        tricks
            .into_iter()
            .map(|won| RoundEntry::new(self.rng.gen_range(0..=cards), won))
            .collect()
    }
}

impl<R: Rng> EntrySource for RandomSource<R> {
    fn next_entries(&mut self, view: &SessionView) -> InputReply {
        InputReply::Entries(self.deal(view.players.len(), view.current_round))
    }
}
