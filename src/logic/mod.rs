//! Game business logic: setup and the turn engine.

mod setup;
mod turns;

pub use setup::start_game;
pub use turns::{adjust_points, BUTTON_DELTAS, WIN_PC_THRESHOLD};
