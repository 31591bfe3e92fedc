use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::MazeError;

/// The four cardinal directions, in the order candidates are enumerated
/// during generation. `Direction::iter()` yields them in declaration order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Cell {
    visited: bool,
    open: [bool; 4], // Indexed by `Direction as usize`.
}

/// A fixed-size rectangular field of cells, stored row by row in one owned
/// allocation. All reads and writes go through coordinate-indexed accessors.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            self.in_bounds(x, y),
            "cell coordinates ({}, {}) are out of bounds",
            x,
            y
        );

        x + y * self.width
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)].visited
    }

    pub fn set_visited(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index].visited = true;
    }

    pub fn is_open(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.cells[self.index(x, y)].open[direction as usize]
    }

    pub fn open_passage(&mut self, x: usize, y: usize, direction: Direction) {
        let index = self.index(x, y);
        self.cells[index].open[direction as usize] = true;
    }

    /// Number of carved passages, each counted once rather than once per
    /// side. A finished maze has `width * height - 1` of them.
    pub fn passage_count(&self) -> usize {
        let open_flags: usize = self
            .cells
            .iter()
            .map(|cell| cell.open.iter().filter(|&&open| open).count())
            .sum();

        open_flags / 2
    }

    // The printable map is (2 * width + 1) x (2 * height + 1) blocks: odd
    // coordinates are cell interiors, even ones are walls and pillars.
    fn is_map_block_open(&self, map_x: usize, map_y: usize) -> bool {
        match (map_x % 2, map_y % 2) {
            (1, 1) => self.is_visited((map_x - 1) / 2, (map_y - 1) / 2),
            (1, 0) => {
                let x = (map_x - 1) / 2;
                let y = map_y / 2;
                y > 0 && y < self.height && self.is_open(x, y, Direction::North)
            }
            (0, 1) => {
                let x = map_x / 2;
                let y = (map_y - 1) / 2;
                x > 0 && x < self.width && self.is_open(x, y, Direction::West)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = (0..2 * self.height + 1)
            .map(|map_y| {
                (0..2 * self.width + 1)
                    .map(|map_x| {
                        if self.is_map_block_open(map_x, map_y) {
                            "  "
                        } else {
                            "██"
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>();

        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn zero_width_or_height_is_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 5
            }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            MazeError::InvalidDimension {
                width: 5,
                height: 0
            }
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn fresh_cells_are_unvisited_and_sealed() {
        let grid = Grid::new(3, 2).unwrap();

        for y in 0..2 {
            for x in 0..3 {
                assert!(!grid.is_visited(x, y));
                for direction in Direction::iter() {
                    assert!(!grid.is_open(x, y, direction));
                }
            }
        }
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn in_bounds_tracks_both_dimensions() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 1));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 2));
    }

    #[test]
    fn visited_and_open_flags_stick_to_the_addressed_cell() {
        let mut grid = Grid::new(3, 3).unwrap();

        grid.set_visited(1, 2);
        assert!(grid.is_visited(1, 2));
        assert!(!grid.is_visited(2, 1));

        grid.open_passage(1, 2, Direction::East);
        assert!(grid.is_open(1, 2, Direction::East));
        assert!(!grid.is_open(1, 2, Direction::West));
        assert!(!grid.is_open(2, 2, Direction::West));
    }

    #[test]
    fn passage_count_counts_pairs_once() {
        let mut grid = Grid::new(2, 1).unwrap();

        grid.open_passage(0, 0, Direction::East);
        grid.open_passage(1, 0, Direction::West);

        assert_eq!(grid.passage_count(), 1);
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn candidate_enumeration_order_is_north_west_south_east() {
        let order: Vec<Direction> = Direction::iter().collect();
        assert_eq!(
            order,
            vec![
                Direction::North,
                Direction::West,
                Direction::South,
                Direction::East
            ]
        );
    }

    #[test]
    fn display_draws_visited_cells_and_carved_walls() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_visited(0, 0);
        grid.set_visited(1, 0);
        grid.open_passage(0, 0, Direction::East);
        grid.open_passage(1, 0, Direction::West);

        let expected = ["██████████", "██      ██", "██████████"].join("\n");
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn display_keeps_walls_around_unvisited_cells() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_visited(0, 0);

        let expected = ["██████████", "██  ██████", "██████████"].join("\n");
        assert_eq!(grid.to_string(), expected);
    }
}
