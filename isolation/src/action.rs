use serde::{Deserialize, Serialize};

use super::board::Square;

/// A half-move: the opening placement of a piece, or a knight move of an
/// already placed piece.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Square),
    Move(Square),
}

impl Action {
    pub fn destination(&self) -> Square {
        match self {
            Action::Place(square) => *square,
            Action::Move(square) => *square,
        }
    }
}
