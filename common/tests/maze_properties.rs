use std::collections::VecDeque;

use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

use common::maze::{Coord, Direction, Maze, MazeError};

fn reachable_from_start(maze: &Maze) -> usize {
    let grid = maze.grid();
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    let mut count = 0;

    let start = maze.start();
    visited[start.y * grid.width() + start.x] = true;
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        count += 1;
        for direction in Direction::iter() {
            if let Some(next) = maze.neighbor(coord, direction) {
                let i = next.y * grid.width() + next.x;
                if !visited[i] {
                    visited[i] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    count
}

fn corners(maze: &Maze) -> [Coord; 4] {
    let right = maze.width() - 1;
    let bottom = maze.height() - 1;
    [
        Coord::new(0, 0),
        Coord::new(right, 0),
        Coord::new(0, bottom),
        Coord::new(right, bottom),
    ]
}

#[test]
fn every_cell_is_reachable_from_the_start() {
    for seed in 0..48 {
        let maze = Maze::from_seed(9, 14, seed).expect("maze should generate");
        assert_eq!(
            reachable_from_start(&maze),
            9 * 14,
            "unreachable cells with seed {}:\n{}",
            seed,
            maze
        );
    }
}

#[test]
fn passages_form_a_tree() {
    for (width, height) in [(2, 2), (3, 3), (10, 10), (17, 4), (1, 20), (38, 38)] {
        let maze = Maze::new(width, height).expect("maze should generate");
        assert_eq!(maze.grid().passage_count(), width * height - 1);
    }
}

#[test]
fn passages_are_symmetric_and_in_bounds() {
    let maze = Maze::from_seed(20, 13, 99).expect("maze should generate");
    let grid = maze.grid();

    for (coord, cell) in grid.iter() {
        for direction in cell.open_directions() {
            let next = grid
                .adjacent(coord, direction)
                .unwrap_or_else(|| panic!("{} opens {} out of the grid", coord, direction));
            assert!(
                grid.is_open(next, direction.opposite()),
                "{} opens {} but {} does not open back",
                coord,
                direction,
                next
            );
        }
    }
}

#[test]
fn same_seed_gives_the_same_maze() {
    let first = Maze::from_seed(25, 25, 2024).expect("maze should generate");
    let second = Maze::from_seed(25, 25, 2024).expect("maze should generate");

    assert_eq!(first, second);
    assert_eq!(first.start(), second.start());
    assert_eq!(first.end(), second.end());
}

#[test]
fn injected_rng_is_the_only_source_of_randomness() {
    let mut rng_a = StdRng::seed_from_u64(77);
    let mut rng_b = StdRng::seed_from_u64(77);

    for _ in 0..4 {
        let a = Maze::generate(11, 7, &mut rng_a).expect("maze should generate");
        let b = Maze::generate(11, 7, &mut rng_b).expect("maze should generate");
        assert_eq!(a, b);
    }
}

#[test]
fn different_seeds_usually_differ() {
    let mazes: Vec<Maze> = (0..8)
        .map(|seed| Maze::from_seed(15, 15, seed).expect("maze should generate"))
        .collect();

    let distinct = mazes
        .iter()
        .enumerate()
        .filter(|(i, maze)| mazes[..*i].iter().all(|other| other != *maze))
        .count();

    assert!(distinct > 1);
}

#[test]
fn start_and_end_are_distinct_opposite_corners() {
    for seed in 0..64 {
        let maze = Maze::from_seed(6, 9, seed).expect("maze should generate");
        let corners = corners(&maze);

        assert_ne!(maze.start(), maze.end());
        assert!(corners.contains(&maze.start()));
        assert!(corners.contains(&maze.end()));
        assert_ne!(maze.start().x, maze.end().x);
        assert_ne!(maze.start().y, maze.end().y);
    }
}

#[test]
fn large_maze_terminates_and_spans_every_cell() {
    let maze = Maze::new(50, 50).expect("maze should generate");

    assert_eq!(maze.grid().passage_count(), 2499);
    assert_eq!(reachable_from_start(&maze), 2500);
}

#[test]
fn three_by_three_scenario() {
    let maze = Maze::new(3, 3).expect("maze should generate");
    let assignments = [
        (Coord::new(0, 0), Coord::new(2, 2)),
        (Coord::new(0, 2), Coord::new(2, 0)),
        (Coord::new(2, 0), Coord::new(0, 2)),
        (Coord::new(2, 2), Coord::new(0, 0)),
    ];

    assert_eq!(maze.grid().passage_count(), 8);
    assert_eq!(reachable_from_start(&maze), 9);
    assert!(assignments.contains(&(maze.start(), maze.end())));
}

#[test]
fn thin_mazes_are_corridors() {
    let row = Maze::new(12, 1).expect("maze should generate");
    let column = Maze::new(1, 12).expect("maze should generate");

    for maze in [row, column] {
        assert_eq!(maze.grid().passage_count(), 11);
        assert_eq!(reachable_from_start(&maze), 12);
        assert_ne!(maze.start(), maze.end());
    }
}

#[test]
fn invalid_dimensions_fail_before_generation() {
    assert_eq!(
        Maze::new(0, 0),
        Err(MazeError::InvalidDimension {
            width: 0,
            height: 0
        })
    );
    assert!(Maze::from_seed(0, 3, 1).is_err());
}
