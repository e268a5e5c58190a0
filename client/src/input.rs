use macroquad::prelude::*;

use common::{config::Difficulty, input::SwipeTracker, maze::Direction};

use crate::session::Command;

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::North),
        KeyCode::Down | KeyCode::S => Some(Direction::South),
        KeyCode::Right | KeyCode::D => Some(Direction::East),
        KeyCode::Left | KeyCode::A => Some(Direction::West),
        _ => None,
    }
}

pub fn command_for_key(key: KeyCode, is_won: bool) -> Option<Command> {
    if let Some(direction) = direction_for_key(key) {
        return Some(Command::Move(direction));
    }

    match key {
        KeyCode::N => Some(Command::NewMaze),
        KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space if is_won => Some(Command::NewMaze),
        KeyCode::Key1 => Some(Command::SetDifficulty(Difficulty::Easy)),
        KeyCode::Key2 => Some(Command::SetDifficulty(Difficulty::Medium)),
        KeyCode::Key3 => Some(Command::SetDifficulty(Difficulty::Hard)),
        KeyCode::Key4 => Some(Command::SetDifficulty(Difficulty::Extreme)),
        _ => None,
    }
}

/// Commands from this frame's key presses and finished touch swipes. After a
/// win, a tap that isn't a swipe asks for a new maze.
pub fn poll_commands(swipe: &mut SwipeTracker, is_won: bool) -> Vec<Command> {
    let mut commands: Vec<Command> = get_keys_pressed()
        .into_iter()
        .filter_map(|key| command_for_key(key, is_won))
        .collect();

    for touch in touches() {
        match touch.phase {
            TouchPhase::Started => swipe.begin(touch.position.x, touch.position.y),
            TouchPhase::Ended => match swipe.end(touch.position.x, touch.position.y) {
                Some(direction) => commands.push(Command::Move(direction)),
                None if is_won => commands.push(Command::NewMaze),
                None => {}
            },
            TouchPhase::Cancelled => swipe.cancel(),
            TouchPhase::Moved | TouchPhase::Stationary => {}
        }
    }

    commands
}
