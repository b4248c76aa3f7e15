//! Setup phase: start the game (transition from Setup to Playing).

use crate::models::{GameError, GamePhase, GameSession, Player, MIN_PLAYERS};

/// Start the game: require at least 2 configs; map each config to a player
/// with starting counters and a palette color by roster position.
pub fn start_game(game: &mut GameSession) -> Result<(), GameError> {
    if game.phase != GamePhase::Setup {
        return Err(GameError::InvalidPhase);
    }
    if game.configs.len() < MIN_PLAYERS {
        return Err(GameError::TooFewPlayers {
            required: MIN_PLAYERS,
        });
    }
    game.players = game
        .configs
        .iter()
        .enumerate()
        .map(|(index, config)| Player::from_config(config, index))
        .collect();
    game.winner = None;
    game.phase = GamePhase::Playing;
    Ok(())
}
