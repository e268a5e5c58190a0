pub mod grid;
pub mod maker;

use std::{error, fmt};

use rand::{Rng, SeedableRng, rngs::StdRng};

pub use grid::{Cell, Coord, Direction, Grid};
use maker::{Backtrack, MazeMaker};

const WALL_SYMBOL: &str = "██";
const SPACE_SYMBOL: &str = "  ";
const START_SYMBOL: &str = "S ";
const END_SYMBOL: &str = "E ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimension { width: usize, height: usize },
    BrokenTrail { at: Coord },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(f, "invalid maze dimensions {}x{}", width, height)
            }
            MazeError::BrokenTrail { at } => {
                write!(f, "dead end at {} has no cell to backtrack to", at)
            }
        }
    }
}

impl error::Error for MazeError {}

/// A perfect maze: every cell reachable from every other by exactly one path.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Maze {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::generate(width, height, &mut rand::rng())
    }

    pub fn from_seed(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        Self::generate(width, height, &mut StdRng::seed_from_u64(seed))
    }

    /// Generates a maze drawing all randomness from `rng`. The same sequence
    /// of random numbers always gives the same maze.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        let mut maker = MazeMaker::new(width, height, rng)?;
        let (start, end) = maker.pick_corners();
        maker.backtrack()?;

        Ok(Self {
            grid: maker.into_grid(),
            start,
            end,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.grid.is_open(coord, direction)
    }

    /// The cell one step away, if no wall is in the way.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if self.is_open(coord, direction) {
            self.grid.adjacent(coord, direction)
        } else {
            None
        }
    }

    pub fn log(&self) -> String {
        let columns = 2 * self.width() + 1;
        let rows = 2 * self.height() + 1;
        let mut blocks = vec![vec![WALL_SYMBOL; columns]; rows];

        for (coord, cell) in self.grid.iter() {
            let x = 2 * coord.x + 1;
            let y = 2 * coord.y + 1;

            blocks[y][x] = if coord == self.start {
                START_SYMBOL
            } else if coord == self.end {
                END_SYMBOL
            } else {
                SPACE_SYMBOL
            };

            if cell.is_open(Direction::East) {
                blocks[y][x + 1] = SPACE_SYMBOL;
            }
            if cell.is_open(Direction::South) {
                blocks[y + 1][x] = SPACE_SYMBOL;
            }
        }

        blocks
            .iter()
            .map(|row| row.concat())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
