use engine::engine::GameEngine;
use engine::game_state::GameState;

/// A two-player counting game used as a deterministic test fixture. Player 0
/// wants the count to reach 100, player 1 wants it at 0; whoever is not to
/// blame when the count hits a boundary wins.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub p1_turn: bool,
    pub count: usize,
}

impl CountingGameState {
    pub fn from_starting_count(p1_turn: bool, count: usize) -> Self {
        Self { p1_turn, count }
    }

    fn losing_player(&self) -> Option<usize> {
        if self.count == 100 {
            Some(1)
        } else if self.count == 0 {
            Some(0)
        } else {
            None
        }
    }
}

impl GameState for CountingGameState {
    fn initial() -> Self {
        Self {
            p1_turn: true,
            count: 50,
        }
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

pub struct CountingGameEngine {}

impl GameEngine for CountingGameEngine {
    type State = CountingGameState;
    type Action = CountingAction;
    type Location = usize;

    fn actions(&self, _game_state: &Self::State) -> Vec<Self::Action> {
        vec![
            CountingAction::Increment,
            CountingAction::Decrement,
            CountingAction::Stay,
        ]
    }

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let count = game_state.count;

        let new_count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            p1_turn: !game_state.p1_turn,
            count: new_count,
        }
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.losing_player().is_some()
    }

    fn utility(&self, game_state: &Self::State, player_id: usize) -> f32 {
        match game_state.losing_player() {
            Some(loser) if loser == player_id => f32::NEG_INFINITY,
            Some(_) => f32::INFINITY,
            None => 0.0,
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        if game_state.p1_turn {
            0
        } else {
            1
        }
    }

    fn ply_count(&self, game_state: &Self::State) -> usize {
        game_state.count
    }

    fn player_location(&self, _game_state: &Self::State, player_id: usize) -> Option<Self::Location> {
        Some(player_id)
    }

    fn liberties(&self, game_state: &Self::State, location: &Self::Location) -> Vec<Self::Location> {
        match game_state.losing_player() {
            Some(loser) if loser == *location => Vec::new(),
            _ => vec![*location],
        }
    }
}
