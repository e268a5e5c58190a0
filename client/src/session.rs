use rand::{SeedableRng, rngs::StdRng};

use common::{
    config::{Difficulty, GameConfig},
    maze::{Direction, Maze, MazeError},
    player::{MoveOutcome, Player},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    NewMaze,
    SetDifficulty(Difficulty),
}

/// Everything one play session owns. A new maze replaces the maze and the
/// player together.
pub struct GameSession {
    rng: StdRng,
    seed: u64,
    difficulty: Difficulty,
    maze: Maze,
    player: Player,
    mazes_generated: u32,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self, MazeError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = generate(difficulty, &mut rng)?;
        let player = Player::new(&maze);

        let session = Self {
            rng,
            seed,
            difficulty,
            maze,
            player,
            mazes_generated: 1,
        };
        // Printed so a session can be replayed with `MAZE_SEED`.
        println!("Seed: {}", seed);
        session.announce_maze();

        Ok(session)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, MazeError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new(config.difficulty, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn mazes_generated(&self) -> u32 {
        self.mazes_generated
    }

    pub fn is_won(&self) -> bool {
        self.player.is_finished()
    }

    pub fn new_maze(&mut self) -> Result<(), MazeError> {
        let maze = generate(self.difficulty, &mut self.rng)?;
        self.player = Player::new(&maze);
        self.maze = maze;
        self.mazes_generated += 1;
        self.announce_maze();

        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MazeError> {
        self.difficulty = difficulty;
        self.new_maze()
    }

    pub fn apply(&mut self, command: Command) -> Result<Option<MoveOutcome>, MazeError> {
        match command {
            Command::Move(direction) => {
                let outcome = self.player.step(&self.maze, direction);
                if let MoveOutcome::Reached { moves } = outcome {
                    println!("Maze {} solved in {} moves.", self.mazes_generated, moves);
                }
                Ok(Some(outcome))
            }
            Command::NewMaze => self.new_maze().map(|_| None),
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty).map(|_| None),
        }
    }

    fn announce_maze(&self) {
        println!(
            "Maze {}: {}x{}, start {}, goal {}.",
            self.mazes_generated,
            self.maze.width(),
            self.maze.height(),
            self.maze.start(),
            self.maze.end()
        );
    }
}

fn generate(difficulty: Difficulty, rng: &mut StdRng) -> Result<Maze, MazeError> {
    let size = difficulty.size();
    Maze::generate(size, size, rng)
}
