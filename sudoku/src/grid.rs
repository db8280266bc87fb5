use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error, Result};

pub const NUM_CELLS: usize = 81;

/// All nine digits still possible.
pub const ALL_DIGITS: u16 = 0x1ff;

/// The candidate digits of one cell as a 9-bit mask, bit `d - 1` for digit
/// `d`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Candidates(pub u16);

impl Candidates {
    pub fn all() -> Self {
        Candidates(ALL_DIGITS)
    }

    pub fn of_digit(digit: u8) -> Self {
        Candidates(1 << (digit - 1))
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// No digit fits; the branch holding this cell is contradicted.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_solved(&self) -> bool {
        self.count() == 1
    }

    pub fn sole_digit(&self) -> Option<u8> {
        if self.is_solved() {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0 & Candidates::of_digit(digit).0 != 0
    }

    pub fn remove(&mut self, digit: u8) {
        self.0 &= !Candidates::of_digit(digit).0;
    }

    /// Digits still possible, ascending.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=9).filter(|digit| self.contains(*digit))
    }
}

/// An 81-cell grid of candidate masks, row-major from the top-left.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub cells: [Candidates; NUM_CELLS],
}

impl Grid {
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Candidates::is_solved)
    }

    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(Candidates::is_empty)
    }

    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solved()).count()
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(grid: &str) -> Result<Self> {
        let mut cells = [Candidates::all(); NUM_CELLS];
        let mut count = 0;

        for (i, c) in grid.chars().enumerate() {
            if i >= NUM_CELLS {
                bail!("grid has more than {} cells", NUM_CELLS);
            }
            cells[i] = match c {
                '.' | '0' => Candidates::all(),
                '1'..='9' => Candidates::of_digit(c as u8 - b'0'),
                other => bail!("unexpected character {:?} in grid", other),
            };
            count += 1;
        }

        if count != NUM_CELLS {
            bail!("grid has {} cells, expected {}", count, NUM_CELLS);
        }

        Ok(Grid { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells.iter() {
            match cell.sole_digit() {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
