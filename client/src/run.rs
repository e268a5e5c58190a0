use macroquad::prelude::*;

use common::{config::GameConfig, input::SwipeTracker};

use crate::{input, layout::Board, session::GameSession, view};

pub async fn run_game_loop(config: GameConfig) {
    let mut session = match GameSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("failed to generate maze: {}", e);
            return;
        }
    };

    let mut swipe = SwipeTracker::new(config.swipe_min);

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        for command in input::poll_commands(&mut swipe, session.is_won()) {
            if let Err(e) = session.apply(command) {
                eprintln!("failed to generate maze: {}", e);
                return;
            }
        }

        draw(&session);

        next_frame().await;
    }
}

fn draw(session: &GameSession) {
    clear_background(view::BG_COLOR);

    let maze = session.maze();
    let board = Board::fit(screen_width(), screen_height(), maze.width(), maze.height());

    view::draw_maze(maze, &board);
    view::draw_goal_flag(&board, maze.end());
    view::draw_player(&board, session.player().position());
    view::draw_status(session);

    if session.is_won() {
        view::draw_victory(session.player().moves());
    }
}
