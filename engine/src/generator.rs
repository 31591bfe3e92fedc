use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Direction, Grid, MazeError};

/// What a single generation step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// A passage was opened from `from` into the previously unvisited `to`.
    Carved {
        from: (usize, usize),
        to: (usize, usize),
        direction: Direction,
    },
    /// The cell at `(x, y)` had no unvisited neighbor and was popped.
    Backtracked { x: usize, y: usize },
    /// The stack is empty; the maze is finished. Calling `step` again is a
    /// no-op that keeps returning this.
    Complete,
}

/// Randomized depth-first backtracker. Borrows the grid it carves for its
/// whole lifetime, so nothing else can write cell state while it runs; read
/// access between steps goes through [`Generator::grid`].
pub struct Generator<'a, R: Rng> {
    grid: &'a mut Grid,
    stack: Vec<(usize, usize)>,
    rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
    /// Marks the start cell visited and seeds the traversal stack with it.
    /// On a single-cell grid there is nothing to carve and the generator is
    /// complete from the outset.
    pub fn new(
        grid: &'a mut Grid,
        start_x: usize,
        start_y: usize,
        rng: R,
    ) -> Result<Self, MazeError> {
        if !grid.in_bounds(start_x, start_y) {
            return Err(MazeError::InvalidStart {
                x: start_x,
                y: start_y,
            });
        }

        grid.set_visited(start_x, start_y);

        let mut generator = Self {
            grid,
            stack: vec![(start_x, start_y)],
            rng,
        };
        if generator.candidates(start_x, start_y).is_empty() {
            generator.stack.pop();
        }

        Ok(generator)
    }

    /// Advances the traversal by one backtrack-or-carve decision.
    pub fn step(&mut self) -> StepResult {
        let Some(&(x, y)) = self.stack.last() else {
            return StepResult::Complete;
        };

        let candidates = self.candidates(x, y);
        if candidates.is_empty() {
            self.stack.pop();
            return StepResult::Backtracked { x, y };
        }

        // Uniform over however many candidates exist right now, not over all
        // four directions filtered afterwards.
        let (direction, (next_x, next_y)) =
            candidates[self.rng.random_range(0..candidates.len())];

        self.grid.open_passage(x, y, direction);
        self.grid.open_passage(next_x, next_y, direction.opposite());
        self.grid.set_visited(next_x, next_y);
        self.stack.push((next_x, next_y));

        StepResult::Carved {
            from: (x, y),
            to: (next_x, next_y),
            direction,
        }
    }

    pub fn run_to_completion(&mut self) {
        while self.step() != StepResult::Complete {}
    }

    pub fn is_complete(&self) -> bool {
        self.stack.is_empty()
    }

    /// The frontier cell the next step will work from, if any.
    pub fn current(&self) -> Option<(usize, usize)> {
        self.stack.last().copied()
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    // Directions whose neighbor is in bounds and unvisited, in North, West,
    // South, East order.
    fn candidates(&self, x: usize, y: usize) -> Vec<(Direction, (usize, usize))> {
        let mut candidates = Vec::new();

        for direction in Direction::iter() {
            if let Some((next_x, next_y)) = self.neighbor(x, y, direction) {
                if !self.grid.is_visited(next_x, next_y) {
                    candidates.push((direction, (next_x, next_y)));
                }
            }
        }

        candidates
    }

    fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let next_x = x as isize + dx as isize;
        let next_y = y as isize + dy as isize;

        if next_x < 0 || next_y < 0 {
            return None;
        }

        let (next_x, next_y) = (next_x as usize, next_y as usize);
        self.grid.in_bounds(next_x, next_y).then_some((next_x, next_y))
    }
}
