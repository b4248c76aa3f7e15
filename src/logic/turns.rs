//! Turn engine: apply a clamped counter adjustment, then evaluate the
//! win/lose rules in a fixed priority order.

use crate::models::{
    CounterKind, GameError, GamePhase, GameSession, Player, PlayerId, PlayerStatus,
};

/// A player wins when PC reaches this value.
pub const WIN_PC_THRESHOLD: u32 = 60;

/// The fixed deltas the UI renders as buttons. The engine itself accepts any
/// delta and only clamps at zero.
pub const BUTTON_DELTAS: [i32; 6] = [1, 2, 4, -1, -2, -4];

/// Adjust one counter for one player, then run the evaluation passes.
///
/// Rejects the call when the game is not running or the target player has
/// already won or lost. Returns the declared winner's name when this
/// adjustment ends the game, `None` otherwise.
pub fn adjust_points(
    game: &mut GameSession,
    player_id: PlayerId,
    counter: CounterKind,
    delta: i32,
) -> Result<Option<String>, GameError> {
    if game.phase != GamePhase::Playing {
        return Err(GameError::InvalidPhase);
    }
    let player = game
        .get_player_mut(player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;
    if !player.is_playing() {
        return Err(GameError::PlayerNotPlaying(player_id));
    }

    let slot = match counter {
        CounterKind::Pc => &mut player.pc,
        CounterKind::Pi => &mut player.pi,
    };
    *slot = slot.saturating_add_signed(delta);

    let winner = evaluate_round(&mut game.players);
    if let Some(name) = &winner {
        game.winner = Some(name.clone());
        game.phase = GamePhase::Finished;
    }
    Ok(winner)
}

/// Run the evaluation passes over the roster, in roster order:
///
/// 1. Win pass: every playing player at PC >= 60 or PI <= 0 becomes Won;
///    the first one encountered is the reported winner. All qualifiers are
///    marked Won even though only the first is reported.
/// 2. Lose pass (no winner yet): every playing player with PC <= PI loses.
/// 3. Sole survivor (no winner yet): a single remaining playing player wins.
/// 4. When a winner was found, every player not Won is forced Lost.
fn evaluate_round(players: &mut [Player]) -> Option<String> {
    let mut winner: Option<String> = None;

    for p in players.iter_mut() {
        if p.is_playing() && (p.pc >= WIN_PC_THRESHOLD || p.pi == 0) {
            p.status = PlayerStatus::Won;
            if winner.is_none() {
                winner = Some(p.name.clone());
            }
        }
    }

    if winner.is_none() {
        for p in players.iter_mut() {
            if p.is_playing() && p.pc <= p.pi {
                p.status = PlayerStatus::Lost;
            }
        }
    }

    if winner.is_none() {
        let mut still_playing = players.iter_mut().filter(|p| p.is_playing());
        if let (Some(survivor), None) = (still_playing.next(), still_playing.next()) {
            survivor.status = PlayerStatus::Won;
            winner = Some(survivor.name.clone());
        }
    }

    if winner.is_some() {
        for p in players.iter_mut() {
            if p.status != PlayerStatus::Won {
                p.status = PlayerStatus::Lost;
            }
        }
    }

    winner
}
