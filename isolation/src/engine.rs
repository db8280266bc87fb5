use engine::engine::GameEngine;

use super::action::Action;
use super::board::Square;
use super::game_state::GameState;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type State = GameState;
    type Action = Action;
    type Location = Square;

    fn actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.legal_actions()
    }

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        game_state.apply(action)
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.legal_actions().is_empty()
    }

    fn utility(&self, game_state: &Self::State, player_id: usize) -> f32 {
        // The player to move in a terminal state is the one left without a
        // move, and has lost.
        if game_state.player_to_move() == player_id {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn ply_count(&self, game_state: &Self::State) -> usize {
        game_state.ply
    }

    fn player_location(&self, game_state: &Self::State, player_id: usize) -> Option<Square> {
        game_state.locs[player_id]
    }

    fn liberties(&self, game_state: &Self::State, location: &Square) -> Vec<Square> {
        game_state.liberties(*location)
    }
}
