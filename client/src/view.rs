use macroquad::prelude::*;

use common::maze::{Cell, Coord, Direction, Maze};

use crate::{layout::Board, session::GameSession};

pub const BG_COLOR: Color = Color::new(0.93, 0.91, 0.86, 1.0);
pub const WALL_COLOR: Color = Color::new(0.1, 0.1, 0.1, 1.0);
const FLAG_DARK: Color = Color::new(0.0, 0.0, 0.0, 0.8);
const FLAG_LIGHT: Color = Color::new(1.0, 1.0, 1.0, 0.8);
const PLAYER_COLOR: Color = YELLOW;
const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.6);
const FLAG_SQUARES: usize = 4;
const FONT_SIZE: f32 = 28.0;

pub fn draw_maze(maze: &Maze, board: &Board) {
    let thickness = board.wall_thickness().max(1.0);

    for (coord, cell) in maze.grid().iter() {
        draw_cell(board, coord, cell, thickness);
    }
}

// Each cell draws all of its own walls, so shared walls are drawn twice.
fn draw_cell(board: &Board, coord: Coord, cell: &Cell, thickness: f32) {
    let (x, y) = board.cell_origin(coord);
    let size = board.cell_size;

    if !cell.is_open(Direction::North) {
        draw_line(x, y, x + size, y, thickness, WALL_COLOR);
    }
    if !cell.is_open(Direction::South) {
        draw_line(x, y + size, x + size, y + size, thickness, WALL_COLOR);
    }
    if !cell.is_open(Direction::East) {
        draw_line(x + size, y, x + size, y + size, thickness, WALL_COLOR);
    }
    if !cell.is_open(Direction::West) {
        draw_line(x, y, x, y + size, thickness, WALL_COLOR);
    }
}

/// Checkered flag marking the goal cell.
pub fn draw_goal_flag(board: &Board, coord: Coord) {
    let (x, y) = board.cell_origin(coord);
    let inset = board.cell_size * 0.1;
    let square = (board.cell_size - 2.0 * inset) / FLAG_SQUARES as f32;

    for row in 0..FLAG_SQUARES {
        for column in 0..FLAG_SQUARES {
            let color = if (row + column) % 2 == 1 {
                FLAG_DARK
            } else {
                FLAG_LIGHT
            };
            draw_rectangle(
                x + inset + column as f32 * square,
                y + inset + row as f32 * square,
                square,
                square,
                color,
            );
        }
    }
}

pub fn draw_player(board: &Board, coord: Coord) {
    let (x, y) = board.cell_center(coord);
    let radius = (board.cell_size / 2.0 - 2.0).max(1.0);
    draw_circle(x, y, radius, PLAYER_COLOR);
}

pub fn draw_status(session: &GameSession) {
    let text = format!(
        "{} {}x{}   moves: {}   [1-4] size  [N] new maze",
        session.difficulty(),
        session.maze().width(),
        session.maze().height(),
        session.player().moves()
    );
    draw_text(&text, 10.0, 20.0, 20.0, DARKGRAY);
}

pub fn draw_victory(moves: u32) {
    let w = screen_width();
    let h = screen_height();
    draw_rectangle(0.0, 0.0, w, h, OVERLAY_COLOR);

    let headline = format!("You Moved {} Steps.", moves);
    let prompt = "Press Enter or tap to play again";
    draw_centered_text(&headline, h / 2.0 - FONT_SIZE / 2.0, FONT_SIZE, WHITE);
    draw_centered_text(prompt, h / 2.0 + FONT_SIZE, FONT_SIZE * 0.7, LIGHTGRAY);
}

fn draw_centered_text(text: &str, y: f32, font_size: f32, color: Color) {
    let metrics = measure_text(text, None, font_size as u16, 1.0);
    let x = (screen_width() - metrics.width) / 2.0;
    draw_text(text, x, y, font_size, color);
}
