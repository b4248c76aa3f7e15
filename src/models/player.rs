//! Player configuration (setup screen) and in-game player state.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player within a game session.
pub type PlayerId = u32;

/// Starting value of the PC counter.
pub const STARTING_PC: u32 = 30;
/// Starting value of the PI counter.
pub const STARTING_PI: u32 = 15;

/// Minimum roster size for a started game.
pub const MIN_PLAYERS: usize = 2;
/// Maximum roster size (also the palette size).
pub const MAX_PLAYERS: usize = 8;

/// Display colors assigned to players by roster position.
pub const PLAYER_COLORS: [&str; 8] = [
    "#e6194b", // red
    "#3cb44b", // green
    "#ffe119", // yellow
    "#4363d8", // blue
    "#f58231", // orange
    "#911eb4", // purple
    "#46f0f0", // cyan
    "#f032e6", // magenta
];

/// Color for the player at `index` in the starting roster.
pub fn player_color(index: usize) -> &'static str {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

/// A player entry on the setup screen: just an id and an editable name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub name: String,
}

/// Which of the two counters an adjustment targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    Pc,
    Pi,
}

/// Where a player stands in the current game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// A player in a started game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub pc: u32,
    pub pi: u32,
    pub status: PlayerStatus,
    /// Hex color from the palette, assigned once at start by roster position.
    pub color: String,
}

impl Player {
    /// Build the runtime player for a config at roster position `index`.
    /// Names are trimmed here; an empty name falls back to "Player {id}".
    pub fn from_config(config: &PlayerConfig, index: usize) -> Self {
        let trimmed = config.name.trim();
        let name = if trimmed.is_empty() {
            format!("Player {}", config.id)
        } else {
            trimmed.to_string()
        };
        Self {
            id: config.id,
            name,
            pc: STARTING_PC,
            pi: STARTING_PI,
            status: PlayerStatus::Playing,
            color: player_color(index).to_string(),
        }
    }

    /// Back to starting counters and status; id, name and color stay.
    pub fn reset(&mut self) {
        self.pc = STARTING_PC;
        self.pi = STARTING_PI;
        self.status = PlayerStatus::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }
}
