//! Data structures for the score tracker: players, game session, coin flip.

mod coin;
mod game;
mod player;

pub use coin::{CoinFace, CoinFlip};
pub use game::{GameError, GameId, GamePhase, GameSession};
pub use player::{
    player_color, CounterKind, Player, PlayerConfig, PlayerId, PlayerStatus, MAX_PLAYERS,
    MIN_PLAYERS, PLAYER_COLORS, STARTING_PC, STARTING_PI,
};
