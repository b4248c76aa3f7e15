//! Integration tests for the turn engine: clamping, win/loss evaluation,
//! and restart.

use placar_web::{
    adjust_points, start_game, CounterKind, GameError, GamePhase, GameSession, PlayerStatus,
    STARTING_PC, STARTING_PI,
};

/// A started game with `n` players named "Jogador 1".."Jogador n".
fn started_game(n: usize) -> GameSession {
    let mut game = GameSession::new();
    for _ in 2..n {
        game.add_player_config().unwrap();
    }
    start_game(&mut game).unwrap();
    game
}

#[test]
fn adjust_applies_delta_without_status_change() {
    let mut game = started_game(2);
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, 4).unwrap();
    assert_eq!(winner, None);
    assert_eq!(game.players[0].pc, 34);
    assert_eq!(game.players[0].status, PlayerStatus::Playing);
    assert_eq!(game.phase, GamePhase::Playing);
}

#[test]
fn counters_clamp_at_zero() {
    let mut game = started_game(3);
    game.players[0].pc = 2;
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, -4).unwrap();
    assert_eq!(game.players[0].pc, 0);
    // 0 <= PI, so the clamped player is out; two others keep playing.
    assert_eq!(game.players[0].status, PlayerStatus::Lost);
    assert_eq!(winner, None);
    assert_eq!(game.phase, GamePhase::Playing);
}

#[test]
fn pc_threshold_wins_and_forces_others_to_lose() {
    let mut game = started_game(3);
    game.players[0].pc = 58;
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, 2).unwrap();
    assert_eq!(winner.as_deref(), Some("Jogador 1"));
    assert_eq!(game.players[0].status, PlayerStatus::Won);
    assert_eq!(game.players[1].status, PlayerStatus::Lost);
    assert_eq!(game.players[2].status, PlayerStatus::Lost);
    assert_eq!(game.winner.as_deref(), Some("Jogador 1"));
    assert_eq!(game.phase, GamePhase::Finished);
}

#[test]
fn pi_reaching_zero_wins_immediately() {
    let mut game = started_game(3);
    game.players[1].pi = 3;
    let winner = adjust_points(&mut game, 2, CounterKind::Pi, -4).unwrap();
    assert_eq!(game.players[1].pi, 0);
    assert_eq!(winner.as_deref(), Some("Jogador 2"));
    assert_eq!(game.players[1].status, PlayerStatus::Won);
    assert_eq!(game.players[0].status, PlayerStatus::Lost);
    assert_eq!(game.players[2].status, PlayerStatus::Lost);
}

#[test]
fn pc_at_or_below_pi_loses_when_nobody_won() {
    let mut game = started_game(3);
    game.players[0].pc = 16;
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, -1).unwrap();
    assert_eq!(winner, None);
    assert_eq!(game.players[0].status, PlayerStatus::Lost);
    assert_eq!(game.players[1].status, PlayerStatus::Playing);
    assert_eq!(game.players[2].status, PlayerStatus::Playing);
    assert_eq!(game.phase, GamePhase::Playing);
}

#[test]
fn sole_survivor_wins() {
    let mut game = started_game(2);
    game.players[0].pc = 16;
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, -1).unwrap();
    assert_eq!(winner.as_deref(), Some("Jogador 2"));
    assert_eq!(game.players[0].status, PlayerStatus::Lost);
    assert_eq!(game.players[1].status, PlayerStatus::Won);
    assert_eq!(game.phase, GamePhase::Finished);
}

#[test]
fn simultaneous_qualifiers_are_all_marked_won_but_first_is_reported() {
    // Not reachable from the starting counters (only one player moves per
    // adjustment), but the evaluation must support it.
    let mut game = started_game(3);
    game.players[1].pc = 60;
    game.players[2].pc = 61;
    let winner = adjust_points(&mut game, 1, CounterKind::Pc, 1).unwrap();
    assert_eq!(winner.as_deref(), Some("Jogador 2"));
    assert_eq!(game.players[1].status, PlayerStatus::Won);
    assert_eq!(game.players[2].status, PlayerStatus::Won);
    assert_eq!(game.players[0].status, PlayerStatus::Lost);
}

#[test]
fn finished_game_rejects_adjustments() {
    let mut game = started_game(2);
    game.players[0].pc = 58;
    adjust_points(&mut game, 1, CounterKind::Pc, 2).unwrap();
    assert_eq!(
        adjust_points(&mut game, 2, CounterKind::Pc, 1),
        Err(GameError::InvalidPhase)
    );
}

#[test]
fn eliminated_player_rejects_adjustments() {
    let mut game = started_game(3);
    game.players[0].pc = 16;
    adjust_points(&mut game, 1, CounterKind::Pc, -1).unwrap();
    assert_eq!(
        adjust_points(&mut game, 1, CounterKind::Pc, 1),
        Err(GameError::PlayerNotPlaying(1))
    );
}

#[test]
fn unknown_player_is_an_error() {
    let mut game = started_game(2);
    assert_eq!(
        adjust_points(&mut game, 99, CounterKind::Pc, 1),
        Err(GameError::PlayerNotFound(99))
    );
}

#[test]
fn restart_resets_counters_and_statuses_but_keeps_identity() {
    let mut game = started_game(3);
    let before: Vec<_> = game
        .players
        .iter()
        .map(|p| (p.id, p.name.clone(), p.color.clone()))
        .collect();

    game.players[0].pc = 58;
    adjust_points(&mut game, 1, CounterKind::Pc, 2).unwrap();
    assert_eq!(game.phase, GamePhase::Finished);

    game.restart().unwrap();
    assert_eq!(game.phase, GamePhase::Playing);
    assert_eq!(game.winner, None);
    for (p, (id, name, color)) in game.players.iter().zip(&before) {
        assert_eq!(p.pc, STARTING_PC);
        assert_eq!(p.pi, STARTING_PI);
        assert_eq!(p.status, PlayerStatus::Playing);
        assert_eq!(p.id, *id);
        assert_eq!(&p.name, name);
        assert_eq!(&p.color, color);
    }
    assert_eq!(game.coin.count, 0);
    assert_eq!(game.coin.display.as_deref(), Some("N/A"));
}

#[test]
fn restart_is_rejected_before_the_game_starts() {
    let mut game = GameSession::new();
    assert_eq!(game.restart(), Err(GameError::InvalidPhase));
}
