pub mod mcts;
pub mod node;
pub mod options;

#[cfg(test)]
mod counting_game;
#[cfg(test)]
mod mcts_tests;

pub use crate::mcts::{NodeMetrics, MCTS};
pub use crate::node::MCTSNode;
pub use crate::options::MCTSOptions;
