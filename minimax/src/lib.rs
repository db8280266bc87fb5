pub mod alpha_beta;
pub mod deepening;
pub mod heuristic;
pub mod minimax;
#[cfg(test)]
mod tree_game;

pub use alpha_beta::*;
pub use deepening::*;
pub use heuristic::*;
pub use minimax::*;
