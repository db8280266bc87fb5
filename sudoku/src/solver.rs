use anyhow::Result;
use itertools::Itertools;

use super::grid::{Candidates, Grid, NUM_CELLS};

const UNIT_SIZE: usize = 9;

/// Constraint-propagation solver for diagonal Sudoku: the usual rows,
/// columns and boxes plus both main diagonals count as units.
pub struct Solver {
    units: Vec<[usize; UNIT_SIZE]>,
    peers: Vec<Vec<usize>>,
}

impl Solver {
    pub fn new() -> Self {
        let units = unit_list();
        let peers = peer_list(&units);

        Self { units, peers }
    }

    /// Parses the 81-character grid, then solves it by reduction and
    /// depth-first search. `Ok(None)` means the puzzle admits no solution.
    pub fn solve(&self, grid: &str) -> Result<Option<String>> {
        let grid: Grid = grid.parse()?;

        Ok(self.search(grid).map(|solved| solved.to_string()))
    }

    fn search(&self, grid: Grid) -> Option<Grid> {
        let grid = self.reduce(grid)?;

        if grid.is_solved() {
            return Some(grid);
        }

        // Branch on an unsolved cell with the fewest candidates, lowest
        // index breaking ties.
        let cell = (0..NUM_CELLS)
            .filter(|&cell| !grid.cells[cell].is_solved())
            .min_by_key(|&cell| (grid.cells[cell].count(), cell))?;

        for digit in grid.cells[cell].digits().collect::<Vec<_>>() {
            let mut attempt = grid.clone();
            attempt.cells[cell] = Candidates::of_digit(digit);

            if let Some(solved) = self.search(attempt) {
                return Some(solved);
            }
        }

        None
    }

    /// Applies all strategies until the number of solved cells stops
    /// growing; `None` when a cell runs out of candidates.
    fn reduce(&self, mut grid: Grid) -> Option<Grid> {
        loop {
            let solved_before = grid.solved_count();

            self.eliminate(&mut grid);
            self.only_choice(&mut grid);
            self.naked_twins(&mut grid);

            if grid.has_contradiction() {
                return None;
            }
            if grid.solved_count() == solved_before {
                return Some(grid);
            }
        }
    }

    /// An assigned digit cannot appear in any peer of its cell.
    fn eliminate(&self, grid: &mut Grid) {
        for cell in 0..NUM_CELLS {
            if let Some(digit) = grid.cells[cell].sole_digit() {
                for &peer in self.peers[cell].iter() {
                    grid.cells[peer].remove(digit);
                }
            }
        }
    }

    /// A digit with a single home left in a unit is assigned there.
    fn only_choice(&self, grid: &mut Grid) {
        for unit in self.units.iter() {
            for digit in 1..=9 {
                let mut places = unit.iter().filter(|&&cell| grid.cells[cell].contains(digit));

                if let (Some(&place), None) = (places.next(), places.next()) {
                    grid.cells[place] = Candidates::of_digit(digit);
                }
            }
        }
    }

    /// Two peers restricted to the same candidate pair exclude that pair
    /// from every cell both of them see.
    fn naked_twins(&self, grid: &mut Grid) {
        for cell in 0..NUM_CELLS {
            if grid.cells[cell].count() != 2 {
                continue;
            }

            for &twin in self.peers[cell].iter() {
                if grid.cells[twin] != grid.cells[cell] {
                    continue;
                }

                let digits: Vec<u8> = grid.cells[cell].digits().collect();
                for &shared in self.peers[cell].iter() {
                    if shared == twin || !self.peers[twin].contains(&shared) {
                        continue;
                    }
                    if grid.cells[shared].count() > 2 {
                        for &digit in digits.iter() {
                            grid.cells[shared].remove(digit);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows, columns, boxes and the two main diagonals.
fn unit_list() -> Vec<[usize; UNIT_SIZE]> {
    let mut units = Vec::with_capacity(29);

    for row in 0..9 {
        let mut unit = [0; UNIT_SIZE];
        for (col, slot) in unit.iter_mut().enumerate() {
            *slot = row * 9 + col;
        }
        units.push(unit);
    }

    for col in 0..9 {
        let mut unit = [0; UNIT_SIZE];
        for (row, slot) in unit.iter_mut().enumerate() {
            *slot = row * 9 + col;
        }
        units.push(unit);
    }

    for box_row in 0..3 {
        for box_col in 0..3 {
            let mut unit = [0; UNIT_SIZE];
            for (i, slot) in unit.iter_mut().enumerate() {
                *slot = (box_row * 3 + i / 3) * 9 + box_col * 3 + i % 3;
            }
            units.push(unit);
        }
    }

    let mut falling = [0; UNIT_SIZE];
    let mut rising = [0; UNIT_SIZE];
    for i in 0..9 {
        falling[i] = i * 9 + i;
        rising[i] = i * 9 + (8 - i);
    }
    units.push(falling);
    units.push(rising);

    units
}

/// Every cell a given cell shares a unit with, itself excluded.
fn peer_list(units: &[[usize; UNIT_SIZE]]) -> Vec<Vec<usize>> {
    (0..NUM_CELLS)
        .map(|cell| {
            units
                .iter()
                .filter(|unit| unit.contains(&cell))
                .flatten()
                .copied()
                .filter(|&peer| peer != cell)
                .sorted()
                .dedup()
                .collect()
        })
        .collect()
}

/// Solves a diagonal Sudoku given as 81 characters, `.` or `0` for blanks.
pub fn solve(grid: &str) -> Result<Option<String>> {
    Solver::new().solve(grid)
}
