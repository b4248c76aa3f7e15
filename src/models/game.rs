//! Game session: the single owner of all game state, plus phase and errors.

use crate::models::coin::CoinFlip;
use crate::models::player::{Player, PlayerConfig, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Game is not in a phase that allows this action.
    InvalidPhase,
    /// No player (or config) with this id.
    PlayerNotFound(PlayerId),
    /// Player has already won or lost; adjustments only apply to playing players.
    PlayerNotPlaying(PlayerId),
    /// Not enough configured players to start.
    TooFewPlayers { required: usize },
    /// The first two players cannot be removed.
    RosterAtMinimum,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidPhase => write!(f, "Invalid phase for this action"),
            GameError::PlayerNotFound(_) => write!(f, "Player not found"),
            GameError::PlayerNotPlaying(_) => write!(f, "Player is no longer playing"),
            GameError::TooFewPlayers { required } => {
                write!(f, "Need at least {} players to start", required)
            }
            GameError::RosterAtMinimum => {
                write!(f, "Cannot remove below {} players", MIN_PLAYERS)
            }
        }
    }
}

/// Which screen the session is on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Editing the player roster; not started.
    #[default]
    Setup,
    /// Game running: adjustments allowed.
    Playing,
    /// A winner was declared; adjustments rejected until restart.
    Finished,
}

/// Full session state: setup roster, runtime roster, phase, winner, coin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub id: GameId,
    /// Setup-screen roster; kept after start so returning to setup shows it again.
    pub configs: Vec<PlayerConfig>,
    /// Runtime roster; empty until the game starts.
    pub players: Vec<Player>,
    pub phase: GamePhase,
    /// Name of the declared winner, once the game ends.
    pub winner: Option<String>,
    pub coin: CoinFlip,
    /// Next config id; never reused, so ids stay unique across removals.
    pub next_config_id: PlayerId,
}

impl GameSession {
    /// New session in Setup with the two mandatory default configs.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            configs: Vec::new(),
            players: Vec::new(),
            phase: GamePhase::Setup,
            winner: None,
            coin: CoinFlip::default(),
            next_config_id: 1,
        };
        for _ in 0..MIN_PLAYERS {
            let _ = session.add_player_config();
        }
        session
    }

    /// Mutable reference to a runtime player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Append a config with the next id and the default name "Jogador {id}".
    /// Adding beyond the roster cap is a silent no-op.
    pub fn add_player_config(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidPhase);
        }
        if self.configs.len() >= MAX_PLAYERS {
            return Ok(());
        }
        let id = self.next_config_id;
        self.next_config_id += 1;
        self.configs.push(PlayerConfig {
            id,
            name: format!("Jogador {}", id),
        });
        Ok(())
    }

    /// Remove a config by id (only valid in Setup, never below the minimum).
    pub fn remove_player_config(&mut self, id: PlayerId) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidPhase);
        }
        if self.configs.len() <= MIN_PLAYERS {
            return Err(GameError::RosterAtMinimum);
        }
        let idx = self
            .configs
            .iter()
            .position(|c| c.id == id)
            .ok_or(GameError::PlayerNotFound(id))?;
        self.configs.remove(idx);
        Ok(())
    }

    /// Replace a config's name verbatim; trimming happens at start time.
    pub fn update_player_name(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidPhase);
        }
        let config = self
            .configs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GameError::PlayerNotFound(id))?;
        config.name = name.into();
        Ok(())
    }

    /// Reset every player to starting counters and status; names, ids and
    /// colors stay. Clears the winner and the coin counters.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.phase == GamePhase::Setup {
            return Err(GameError::InvalidPhase);
        }
        for p in &mut self.players {
            p.reset();
        }
        self.winner = None;
        self.phase = GamePhase::Playing;
        self.coin.reset();
        Ok(())
    }

    /// Back to the setup screen: discard the runtime roster, keep the configs.
    pub fn return_to_setup(&mut self) -> Result<(), GameError> {
        if self.phase == GamePhase::Setup {
            return Err(GameError::InvalidPhase);
        }
        self.players.clear();
        self.winner = None;
        self.phase = GamePhase::Setup;
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
