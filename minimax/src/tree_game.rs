use engine::engine::GameEngine;
use engine::game_state::GameState;

use crate::heuristic::Heuristic;

/// A two-level binary game tree with hand-computable values. Utilities are
/// for player 0; player 1 sees them negated.
pub const LEAF_VALUES: [[f32; 2]; 2] = [[3.0, 12.0], [2.0, 8.0]];

/// Heuristic values of the two depth-one nodes, used at depth cutoffs.
pub const INTERIOR_VALUES: [f32; 2] = [5.0, 1.0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeGameState {
    pub path: Vec<usize>,
}

impl GameState for TreeGameState {
    fn initial() -> Self {
        Self { path: Vec::new() }
    }
}

pub struct TreeGameEngine {}

impl TreeGameEngine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for TreeGameEngine {
    type State = TreeGameState;
    type Action = usize;
    type Location = usize;

    fn actions(&self, game_state: &Self::State) -> Vec<usize> {
        if game_state.path.len() < 2 {
            vec![0, 1]
        } else {
            Vec::new()
        }
    }

    fn take_action(&self, game_state: &Self::State, action: &usize) -> Self::State {
        let mut path = game_state.path.clone();
        path.push(*action);
        Self::State { path }
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.path.len() == 2
    }

    fn utility(&self, game_state: &Self::State, player_id: usize) -> f32 {
        let value = LEAF_VALUES[game_state.path[0]][game_state.path[1]];
        if player_id == 0 {
            value
        } else {
            -value
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.path.len() % 2
    }

    fn ply_count(&self, game_state: &Self::State) -> usize {
        game_state.path.len()
    }

    fn player_location(&self, _game_state: &Self::State, _player_id: usize) -> Option<usize> {
        None
    }

    fn liberties(&self, _game_state: &Self::State, _location: &usize) -> Vec<usize> {
        Vec::new()
    }
}

/// Looks node values up in the fixed tables, from `player_id`'s perspective.
pub struct TableHeuristic {}

impl TableHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<TreeGameEngine> for TableHeuristic {
    fn score(&self, _game_engine: &TreeGameEngine, game_state: &TreeGameState, player_id: usize) -> f32 {
        let value = match game_state.path.as_slice() {
            [] => 0.0,
            [first] => INTERIOR_VALUES[*first],
            [first, second] => LEAF_VALUES[*first][*second],
            _ => unreachable!("tree game states hold at most two plies"),
        };

        if player_id == 0 {
            value
        } else {
            -value
        }
    }
}
