use engine::game_state::GameState as GameStateTrait;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::board::{iter_squares, Square, FULL_BOARD};

/// Knight-move Isolation. Each player first places a piece on any open
/// square, then moves it like a chess knight; every square a piece occupies
/// is closed for the rest of the game. The player left without a move loses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub open: u128,
    pub locs: [Option<Square>; 2],
    pub ply: usize,
}

impl GameStateTrait for GameState {
    fn initial() -> Self {
        Self {
            open: FULL_BOARD,
            locs: [None, None],
            ply: 0,
        }
    }
}

impl GameState {
    pub fn player_to_move(&self) -> usize {
        self.ply % 2
    }

    pub fn is_open(&self, square: Square) -> bool {
        self.open & square.bit() != 0
    }

    /// Open knight destinations from `square`.
    pub fn liberties(&self, square: Square) -> Vec<Square> {
        square
            .knight_destinations()
            .filter(|dest| self.is_open(*dest))
            .collect()
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        match self.locs[self.player_to_move()] {
            None => iter_squares(self.open).map(Action::Place).collect(),
            Some(loc) => self.liberties(loc).into_iter().map(Action::Move).collect(),
        }
    }

    pub fn apply(&self, action: &Action) -> Self {
        let destination = action.destination();
        let mut locs = self.locs;
        locs[self.player_to_move()] = Some(destination);

        Self {
            open: self.open & !destination.bit(),
            locs,
            ply: self.ply + 1,
        }
    }
}
