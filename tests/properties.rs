//! Property-based tests for scoring and session invariants.

use proptest::prelude::*;

use skullscore::{GameError, RoundEntry, Session, round_score, views};

fn entry() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=10, 0i64..=10)
}

fn round_of(players: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec(entry(), players)
}

fn to_entries(pairs: &[(i64, i64)]) -> Vec<RoundEntry> {
    pairs
        .iter()
        .map(|&(bet, won)| RoundEntry::new(bet, won))
        .collect()
}

fn started(players: usize) -> Session {
    Session::builder()
        .with_players((0..players).map(|i| format!("P{i}")))
        .started()
        .build()
        .expect("valid roster")
}

proptest! {
    /// Exact bets: 10 per round for zero, 20 per trick otherwise.
    #[test]
    fn prop_exact_bet_score(bet in 0u8..=10, round in 1u8..=10) {
        let expected = if bet == 0 { 10 * i32::from(round) } else { 20 * i32::from(bet) };
        prop_assert_eq!(round_score(bet, bet, round), expected);
    }

    /// Missed bets lose 10 per trick of difference, whatever the round.
    #[test]
    fn prop_missed_bet_score(bet in 0u8..=10, won in 0u8..=10, round in 1u8..=10) {
        prop_assume!(bet != won);
        let expected = -10 * (i32::from(bet) - i32::from(won)).abs();
        prop_assert_eq!(round_score(bet, won, round), expected);
        prop_assert_eq!(round_score(bet, won, round), round_score(bet, won, 1));
    }

    /// Totals always equal the sum of recorded round scores, and the round
    /// counter moves by exactly one per accepted round.
    #[test]
    fn prop_totals_and_counter(
        rounds in (2usize..=6).prop_flat_map(|n| prop::collection::vec(round_of(n), 1..=10))
    ) {
        let players = rounds[0].len();
        let mut session = started(players);
        for (index, round) in rounds.iter().enumerate() {
            let before = session.current_round();
            session.advance_round(&to_entries(round)).expect("valid round");
            prop_assert_eq!(session.current_round(), before + 1);
            prop_assert_eq!(usize::from(session.current_round()), index + 2);
            for player in session.players() {
                prop_assert_eq!(player.total_score(), player.recomputed_total());
                prop_assert_eq!(player.rounds().len(), index + 1);
            }
        }
    }

    /// A single bad entry among many leaves every player untouched.
    #[test]
    fn prop_invalid_round_is_atomic(
        (good, bad_index) in (2usize..=6).prop_flat_map(|n| (round_of(n), 0..n)),
        bad_value in prop_oneof![-20i64..0, 11i64..50],
        corrupt_bet in any::<bool>(),
    ) {
        let mut session = started(good.len());
        session.advance_round(&to_entries(&good)).expect("valid round");
        let before = session.clone();

        let mut entries = to_entries(&good);
        if corrupt_bet {
            entries[bad_index].bet = Some(bad_value);
        } else {
            entries[bad_index].tricks_won = Some(bad_value);
        }
        let result = session.advance_round(&entries);
        prop_assert!(matches!(result, Err(GameError::InvalidInput(_))));
        prop_assert_eq!(&session, &before);
    }

    /// Leaderboard order is deterministic and breaks ties by roster order.
    #[test]
    fn prop_leaderboard_is_stable(
        round in (2usize..=6).prop_flat_map(round_of)
    ) {
        let mut session = started(round.len());
        session.advance_round(&to_entries(&round)).expect("valid round");
        let first = views::leaderboard(session.roster());
        let second = views::leaderboard(session.roster());
        prop_assert_eq!(&first, &second);
        for pair in first.windows(2) {
            prop_assert!(pair[0].total_score >= pair[1].total_score);
            if pair[0].total_score == pair[1].total_score {
                prop_assert!(pair[0].player < pair[1].player);
            }
        }
    }
}
