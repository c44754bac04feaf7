use skullscore::{
    Command, GameError, GamePhase, InvalidEntry, RoundEntry, RoundOutcome, Session,
};

fn entries(pairs: &[(i64, i64)]) -> Vec<RoundEntry> {
    pairs
        .iter()
        .map(|&(bet, won)| RoundEntry::new(bet, won))
        .collect()
}

fn started(names: &[&str]) -> Result<Session, GameError> {
    Session::builder()
        .with_players(names.iter().copied())
        .started()
        .build()
}

#[test]
fn first_round_scores_and_advances() -> Result<(), GameError> {
    let mut session = started(&["P1", "P2"])?;
    let outcome = session.advance_round(&entries(&[(3, 3), (2, 0)]))?;
    assert_eq!(outcome, RoundOutcome::Continue { next_round: 2 });
    let players = session.players();
    assert_eq!(players[0].rounds()[0].score, 60);
    assert_eq!(players[1].rounds()[0].score, -20);
    assert_eq!(players[0].total_score(), 60);
    assert_eq!(players[1].total_score(), -20);
    assert_eq!(session.current_round(), 2);
    Ok(())
}

#[test]
fn zero_bet_in_round_five_scores_fifty() -> Result<(), GameError> {
    let mut session = started(&["P1", "P2"])?;
    for _ in 0..4 {
        session.advance_round(&entries(&[(1, 0), (1, 0)]))?;
    }
    assert_eq!(session.current_round(), 5);
    session.advance_round(&entries(&[(0, 0), (1, 1)]))?;
    let round_five = session.players()[0].rounds()[4];
    assert_eq!(round_five.round, 5);
    assert_eq!(round_five.score, 50);
    Ok(())
}

#[test]
fn tenth_round_ends_game_with_earliest_player_winning_tie() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny", "Calico"])?;
    let mut last = None;
    for _ in 0..10 {
        // Anne and Bonny both score +20 each round; Calico misses.
        last = Some(session.advance_round(&entries(&[(1, 1), (1, 1), (2, 0)]))?);
    }
    let Some(RoundOutcome::GameEnded(standing)) = last else {
        panic!("tenth round should end the game");
    };
    assert_eq!(session.current_round(), 11);
    assert_eq!(standing.winner.name, "Anne");
    assert_eq!(standing.winner.total_score, 200);
    let order: Vec<&str> = standing.ranking.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, vec!["Anne", "Bonny", "Calico"]);
    assert_eq!(session.phase(), GamePhase::Ended { winner: 0 });
    assert_eq!(session.winner(), Some(0));
    assert!(!session.is_active());
    Ok(())
}

#[test]
fn highest_total_wins_regardless_of_seat() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    let mut last = None;
    for _ in 0..10 {
        last = Some(session.advance_round(&entries(&[(1, 0), (2, 2)]))?);
    }
    let Some(RoundOutcome::GameEnded(standing)) = last else {
        panic!("tenth round should end the game");
    };
    assert_eq!(standing.winner.player, 1);
    assert_eq!(standing.winner.total_score, 400);
    Ok(())
}

#[test]
fn no_eleventh_round_is_accepted() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    for _ in 0..10 {
        session.advance_round(&entries(&[(0, 0), (0, 0)]))?;
    }
    let before = session.clone();
    assert_eq!(
        session.advance_round(&entries(&[(0, 0), (0, 0)])),
        Err(GameError::GameOver)
    );
    assert_eq!(session, before);
    Ok(())
}

#[test]
fn out_of_range_bet_rejects_whole_round() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny", "Calico"])?;
    session.advance_round(&entries(&[(1, 1), (0, 0), (2, 1)]))?;
    let before = session.clone();
    let result = session.advance_round(&entries(&[(1, 1), (11, 0), (0, 0)]));
    assert_eq!(
        result,
        Err(GameError::InvalidInput(InvalidEntry::BetOutOfRange {
            player: 1,
            value: 11
        }))
    );
    assert_eq!(session, before);
    assert_eq!(session.current_round(), 2);
    for player in session.players() {
        assert_eq!(player.rounds().len(), 1);
    }
    Ok(())
}

#[test]
fn missing_or_unparsable_values_reject_round() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    let before = session.clone();
    let round = vec![RoundEntry::from_text("2", "2"), RoundEntry::from_text("1.5", "1")];
    assert!(matches!(
        session.advance_round(&round),
        Err(GameError::InvalidInput(InvalidEntry::MissingBet { player: 1 }))
    ));
    let short = entries(&[(1, 1)]);
    assert!(matches!(
        session.advance_round(&short),
        Err(GameError::InvalidInput(InvalidEntry::EntryCount {
            expected: 2,
            received: 1
        }))
    ));
    assert_eq!(session, before);
    Ok(())
}

#[test]
fn roster_is_frozen_after_start() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    assert!(matches!(session.remove_player(0), Err(GameError::RosterFrozen)));
    assert_eq!(session.add_player("Calico"), Err(GameError::RosterFrozen));
    let names: Vec<&str> = session.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Anne", "Bonny"]);
    Ok(())
}

#[test]
fn start_requires_two_players() -> Result<(), GameError> {
    let mut session = Session::new();
    assert_eq!(
        session.start_game(),
        Err(GameError::InsufficientPlayers { found: 0 })
    );
    session.add_player("Anne")?;
    assert!(!session.can_start());
    assert_eq!(
        session.start_game(),
        Err(GameError::InsufficientPlayers { found: 1 })
    );
    session.add_player("Bonny")?;
    assert!(session.can_start());
    session.remove_player(0)?;
    assert!(!session.can_start());
    session.add_player("Calico")?;
    session.start_game()?;
    assert_eq!(session.phase(), GamePhase::InProgress);
    assert!(!session.can_start());
    Ok(())
}

#[test]
fn reset_returns_to_empty_setup() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    session.advance_round(&entries(&[(1, 1), (0, 1)]))?;
    assert!(session.reset_requires_confirmation());
    session.apply(Command::Reset)?;
    assert_eq!(session.phase(), GamePhase::Setup);
    assert_eq!(session.current_round(), 1);
    assert!(session.players().is_empty());
    // Roster is editable again and colors start over.
    session.add_player("Drake")?;
    assert_eq!(session.players()[0].color_index(), 0);
    assert!(session.players()[0].rounds().is_empty());
    Ok(())
}

#[test]
fn finished_game_resets_without_confirmation() -> Result<(), GameError> {
    let mut session = started(&["Anne", "Bonny"])?;
    for _ in 0..10 {
        session.advance_round(&entries(&[(0, 0), (0, 1)]))?;
    }
    assert!(session.can_reset_safely());
    session.reset();
    assert!(session.can_reset_safely());
    Ok(())
}
