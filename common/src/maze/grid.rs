use std::fmt;

use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step as `(dx, dy)`, with `y` growing southwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Passage flags for one grid position. `true` means open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    passages: [bool; 4],
}

impl Cell {
    pub fn is_open(&self, direction: Direction) -> bool {
        self.passages[direction.index()]
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().filter(|&direction| self.is_open(direction))
    }

    fn open(&mut self, direction: Direction) {
        self.passages[direction.index()] = true;
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every wall standing, or `None` if the cells can't be
    /// allocated.
    pub(crate) fn closed(width: usize, height: usize) -> Option<Self> {
        let cells = filled(width.checked_mul(height)?, Cell::default())?;

        Some(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Adjacent in-bounds coordinate, whether or not a wall separates them.
    pub fn adjacent(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.offset();
        let x = coord.x.checked_add_signed(dx)?;
        let y = coord.y.checked_add_signed(dy)?;
        let next = Coord::new(x, y);
        self.contains(next).then_some(next)
    }

    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord).is_some_and(|cell| cell.is_open(direction))
    }

    /// Every coordinate in row-major order paired with its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::new(i % self.width, i / self.width), cell))
    }

    /// Open edges, each adjacent pair counted once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                cell.is_open(Direction::East) as usize + cell.is_open(Direction::South) as usize
            })
            .sum()
    }

    pub(crate) fn carve(&mut self, from: Coord, direction: Direction) -> Option<Coord> {
        let to = self.adjacent(from, direction)?;
        let from_index = self.index(from);
        let to_index = self.index(to);
        self.cells[from_index].open(direction);
        self.cells[to_index].open(direction.opposite());
        Some(to)
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }
}

/// `len` copies of `value`, without panicking or aborting when the memory
/// can't be had.
pub(crate) fn filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut items = Vec::new();
    items.try_reserve_exact(len).ok()?;
    items.resize(len, value);
    Some(items)
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("passages", &self.passage_count())
            .finish()
    }
}
