pub mod algorithms;

use rand::Rng;

use super::{
    MazeError,
    grid::{Coord, Direction, Grid, filled},
};

pub use algorithms::backtrack::Backtrack;

/// Order the direction candidates start in before the first shuffle.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

// Generation-only bookkeeping, dropped once the grid is handed over.
#[derive(Clone, Copy, Debug, Default)]
struct Trail {
    visited: bool,
    prior: Option<Coord>,
}

pub struct MazeMaker<R: Rng> {
    pub grid: Grid,
    pub rng: R,
    trails: Vec<Trail>,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        let grid = Grid::closed(width, height).ok_or(invalid.clone())?;
        let trails = filled(grid.len(), Trail::default()).ok_or(invalid)?;

        Ok(MazeMaker { grid, rng, trails })
    }

    /// Draws one of the four diagonal corner pairs as `(start, end)`.
    pub fn pick_corners(&mut self) -> (Coord, Coord) {
        let right = self.grid.width() - 1;
        let bottom = self.grid.height() - 1;

        match self.rng.random_range(0..4) {
            0 => (Coord::new(0, 0), Coord::new(right, bottom)),
            1 => (Coord::new(0, bottom), Coord::new(right, 0)),
            2 => (Coord::new(right, 0), Coord::new(0, bottom)),
            _ => (Coord::new(right, bottom), Coord::new(0, 0)),
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn visit(&mut self, coord: Coord) {
        let i = self.grid.index(coord);
        self.trails[i].visited = true;
    }

    fn is_visited(&self, coord: Coord) -> bool {
        self.trails[self.grid.index(coord)].visited
    }

    fn prior(&self, coord: Coord) -> Option<Coord> {
        self.trails[self.grid.index(coord)].prior
    }

    /// First direction, in the given order, leading to an unvisited cell.
    fn unvisited_neighbor(&self, coord: Coord, directions: &[Direction]) -> Option<Direction> {
        directions.iter().copied().find(|&direction| {
            self.grid
                .adjacent(coord, direction)
                .is_some_and(|next| !self.is_visited(next))
        })
    }

    /// Opens the wall towards `direction`, remembers where the new cell was
    /// reached from and returns it.
    fn carve_from(&mut self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = self.grid.carve(coord, direction)?;
        let i = self.grid.index(next);
        self.trails[i].prior = Some(coord);
        self.trails[i].visited = true;
        Some(next)
    }

    #[cfg(test)]
    fn visited_count(&self) -> usize {
        self.trails.iter().filter(|trail| trail.visited).count()
    }
}
