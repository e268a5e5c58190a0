use rand::{Rng, seq::SliceRandom};

use super::super::{DIRECTIONS, MazeMaker};
use crate::maze::{Coord, MazeError};

pub trait Backtrack {
    fn backtrack(&mut self) -> Result<(), MazeError>;
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    /// Depth-first carve from the top-left cell. The direction order is
    /// reshuffled after a random run of steps whose bound grows with the
    /// height, which keeps corridors from all bending the same way.
    fn backtrack(&mut self) -> Result<(), MazeError> {
        let cell_count = self.grid.len();
        let reshuffle_bound = self.grid.height() / 8;

        let mut position = Coord::new(0, 0);
        let mut visited_count = 1;
        let mut directions = DIRECTIONS;
        let mut loops = 0;
        let mut max_loops = 0;

        self.visit(position);

        while visited_count < cell_count {
            self.visit(position);

            if loops >= max_loops {
                directions.shuffle(&mut self.rng);
                max_loops = self.rng.random_range(0..=reshuffle_bound);
                loops = 0;
            }
            loops += 1;

            let next = self
                .unvisited_neighbor(position, &directions)
                .and_then(|direction| self.carve_from(position, direction));

            match next {
                Some(next) => {
                    position = next;
                    visited_count += 1;
                }
                // Dead end. Only the origin has no prior cell, and the origin
                // can't be a dead end while cells remain unvisited.
                None => {
                    position = self
                        .prior(position)
                        .ok_or(MazeError::BrokenTrail { at: position })?;
                }
            }
        }

        Ok(())
    }
}
