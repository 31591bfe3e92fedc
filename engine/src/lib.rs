//! Maze generation by randomized depth-first backtracking. `Grid` holds the
//! cell state, `Generator` carves a spanning tree into it one step at a time.

pub mod generator;
pub mod grid;

use std::fmt;

use rand::Rng;

pub use generator::{Generator, StepResult};
pub use grid::{Direction, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimension { width: usize, height: usize },
    InvalidStart { x: usize, y: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(
                    f,
                    "Grid dimensions must both be at least 1, got {}x{}.",
                    width, height
                )
            }
            MazeError::InvalidStart { x, y } => {
                write!(f, "Start cell ({}, {}) is outside the grid.", x, y)
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Builds a grid, carves it to completion, and hands back the finished maze.
pub fn generate<R: Rng>(
    width: usize,
    height: usize,
    start: (usize, usize),
    rng: R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    let mut generator = Generator::new(&mut grid, start.0, start.1, rng)?;
    generator.run_to_completion();
    Ok(grid)
}
