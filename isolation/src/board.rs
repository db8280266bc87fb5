use serde::{Deserialize, Serialize};

pub const WIDTH: i8 = 11;
pub const HEIGHT: i8 = 9;
pub const NUM_SQUARES: u8 = (WIDTH * HEIGHT) as u8;

/// Every square starts open; squares close forever once occupied.
pub const FULL_BOARD: u128 = (1 << NUM_SQUARES) - 1;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A board location, indexed row-major from the bottom left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(pub u8);

impl Square {
    pub fn from_coords(col: i8, row: i8) -> Option<Self> {
        if (0..WIDTH).contains(&col) && (0..HEIGHT).contains(&row) {
            Some(Square((row * WIDTH + col) as u8))
        } else {
            None
        }
    }

    pub fn col(&self) -> i8 {
        (self.0 as i8) % WIDTH
    }

    pub fn row(&self) -> i8 {
        (self.0 as i8) / WIDTH
    }

    pub fn bit(&self) -> u128 {
        1 << self.0
    }

    /// On-board knight destinations, regardless of whether they are open.
    pub fn knight_destinations(&self) -> impl Iterator<Item = Square> + '_ {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(move |(dc, dr)| Square::from_coords(self.col() + dc, self.row() + dr))
    }
}

/// Iterates the set bits of an open-square mask in ascending square order.
pub fn iter_squares(mut mask: u128) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as u8;
        mask &= mask - 1;
        Some(Square(index))
    })
}
