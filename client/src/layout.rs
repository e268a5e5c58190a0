use common::maze::Coord;

/// Share of the shorter screen side the board takes up.
pub const BOARD_FILL: f32 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
}

impl Board {
    /// Largest board of square cells that fits the screen, centred.
    pub fn fit(screen_width: f32, screen_height: f32, columns: usize, rows: usize) -> Self {
        let side = screen_width.min(screen_height).max(0.0) * BOARD_FILL;
        let cell_size = side / columns.max(rows).max(1) as f32;
        let width = cell_size * columns as f32;
        let height = cell_size * rows as f32;

        Self {
            x: (screen_width - width) / 2.0,
            y: (screen_height - height) / 2.0,
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_origin(&self, coord: Coord) -> (f32, f32) {
        (
            self.x + coord.x as f32 * self.cell_size,
            self.y + coord.y as f32 * self.cell_size,
        )
    }

    pub fn cell_center(&self, coord: Coord) -> (f32, f32) {
        let (x, y) = self.cell_origin(coord);
        let half = self.cell_size / 2.0;
        (x + half, y + half)
    }

    pub fn wall_thickness(&self) -> f32 {
        self.cell_size / 40.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn board_fits_the_shorter_side() {
        let board = Board::fit(1000.0, 500.0, 10, 10);

        assert_close(board.width, 495.0);
        assert_close(board.height, 495.0);
        assert_close(board.cell_size, 49.5);
        assert_close(board.x, 252.5);
        assert_close(board.y, 2.5);
    }

    #[test]
    fn wide_mazes_use_the_longer_dimension() {
        let board = Board::fit(600.0, 600.0, 20, 10);

        assert_close(board.cell_size, 600.0 * BOARD_FILL / 20.0);
        assert_close(board.height, board.width / 2.0);
    }

    #[test]
    fn cells_tile_the_board() {
        let board = Board::fit(400.0, 400.0, 4, 4);

        assert_eq!(board.cell_origin(Coord::new(0, 0)), (board.x, board.y));
        let (right, bottom) = board.cell_origin(Coord::new(3, 3));
        assert_close(right + board.cell_size, board.x + board.width);
        assert_close(bottom + board.cell_size, board.y + board.height);
    }

    #[test]
    fn cell_center_is_half_a_cell_in() {
        let board = Board::fit(200.0, 200.0, 2, 2);
        let (x, y) = board.cell_origin(Coord::new(1, 0));

        assert_eq!(
            board.cell_center(Coord::new(1, 0)),
            (x + board.cell_size / 2.0, y + board.cell_size / 2.0)
        );
    }

    #[test]
    fn wall_thickness_scales_with_cells() {
        let small = Board::fit(400.0, 400.0, 40, 40);
        let large = Board::fit(400.0, 400.0, 10, 10);

        assert!(large.wall_thickness() > small.wall_thickness());
        assert_eq!(large.wall_thickness(), large.cell_size / 40.0);
    }
}
