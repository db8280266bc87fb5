pub mod grid;
pub mod solver;

pub use crate::grid::{Candidates, Grid};
pub use crate::solver::{solve, Solver};
