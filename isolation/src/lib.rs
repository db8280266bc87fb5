mod action;
mod board;
mod engine;
mod game_state;

pub use crate::action::Action;
pub use crate::board::{Square, HEIGHT, NUM_SQUARES, WIDTH};
pub use crate::engine::Engine;
pub use crate::game_state::GameState;
