//! Turn-based score tracker web app: library with models and game logic.

pub mod logic;
pub mod models;

pub use logic::{adjust_points, start_game, BUTTON_DELTAS, WIN_PC_THRESHOLD};
pub use models::{
    CoinFace, CoinFlip, CounterKind, GameError, GameId, GamePhase, GameSession, Player,
    PlayerConfig, PlayerId, PlayerStatus, MAX_PLAYERS, MIN_PLAYERS, PLAYER_COLORS, STARTING_PC,
    STARTING_PI,
};
