use crate::maze::{Coord, Direction, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Coord),
    Blocked,
    Reached { moves: u32 },
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Coord,
    moves: u32,
    finished: bool,
}

impl Player {
    pub fn new(maze: &Maze) -> Self {
        Self {
            position: maze.start(),
            moves: 0,
            finished: maze.start() == maze.end(),
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every attempt counts as a move, including walking into a wall. Once
    /// the goal is reached further input is ignored.
    pub fn step(&mut self, maze: &Maze, direction: Direction) -> MoveOutcome {
        if self.finished {
            return MoveOutcome::Ignored;
        }

        self.moves = self.moves.saturating_add(1);

        let Some(next) = maze.neighbor(self.position, direction) else {
            return MoveOutcome::Blocked;
        };

        self.position = next;

        if next == maze.end() {
            self.finished = true;
            MoveOutcome::Reached { moves: self.moves }
        } else {
            MoveOutcome::Moved(next)
        }
    }
}
