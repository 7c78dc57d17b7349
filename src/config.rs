use std::time::Duration;

use ratatui::style::Color;

use crate::snake::Position;

/// Logical grid dimensions, walls included.
///
/// Row and column 0 and the last row and column are wall. Every cell strictly
/// inside them is playable interior.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub height: u16,
    pub width: u16,
}

impl GridSize {
    /// Returns true when the grid has at least one interior cell.
    #[must_use]
    pub fn has_interior(self) -> bool {
        self.height >= MIN_GRID_SIDE && self.width >= MIN_GRID_SIDE
    }

    /// Returns true when `position` is a playable (non-wall) cell.
    #[must_use]
    pub fn interior_contains(self, position: Position) -> bool {
        position.row >= 1
            && position.col >= 1
            && position.row <= i32::from(self.height) - 2
            && position.col <= i32::from(self.width) - 2
    }

    /// Iterates interior cells in row-major order.
    pub fn interior_cells(self) -> impl Iterator<Item = Position> {
        let last_row = i32::from(self.height) - 2;
        let last_col = i32::from(self.width) - 2;
        (1..=last_row).flat_map(move |row| (1..=last_col).map(move |col| Position { row, col }))
    }

    /// Returns the cell the snake starts on.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            row: i32::from(self.height / 2),
            col: i32::from(self.width / 2),
        }
    }

    /// Shrinks the requested grid so it fits a terminal of `rows` x `cols`,
    /// leaving room for the title bar, score line and instructions.
    #[must_use]
    pub fn fit_to_terminal(self, cols: u16, rows: u16) -> Self {
        Self {
            height: self.height.min(rows.saturating_sub(CHROME_ROWS)),
            width: self.width.min(cols.saturating_sub(CHROME_COLS)),
        }
    }
}

/// Smallest grid side that still leaves one interior cell.
pub const MIN_GRID_SIDE: u16 = 3;

/// Default grid height, walls included.
pub const DEFAULT_GRID_HEIGHT: u16 = 18;

/// Default grid width, walls included.
pub const DEFAULT_GRID_WIDTH: u16 = 50;

/// Terminal rows taken by everything except the board.
pub const CHROME_ROWS: u16 = 6;

/// Terminal columns taken by the board margins.
pub const CHROME_COLS: u16 = 4;

/// Points granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Milliseconds between moves at the start of a game.
pub const INITIAL_BASE_SPEED_MS: f64 = 120.0;

/// Milliseconds shaved off the base speed per food eaten.
pub const SPEED_DECREMENT_MS: f64 = 3.0;

/// Base speed never drops below this many milliseconds.
pub const MIN_BASE_SPEED_MS: f64 = 40.0;

/// Tick interval multiplier for vertical moves. Terminal cells are roughly
/// twice as tall as they are wide.
pub const VERTICAL_SPEED_FACTOR: f64 = 1.8;

/// Delay between frames of the render/input/clock loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub const GLYPH_FOOD: &str = "O";
pub const GLYPH_SNAKE_HEAD_UP: &str = "^";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "v";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "<";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = ">";
pub const GLYPH_SNAKE_BODY: &str = "#";
pub const GLYPH_SNAKE_TAIL: &str = ".";
pub const GLYPH_WALL_HORIZONTAL: &str = "─";
pub const GLYPH_WALL_VERTICAL: &str = "│";
pub const GLYPH_TITLE_RULE: &str = "=";

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head_fg: Color,
    pub snake_head_bg: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub title: Color,
    pub instructions: Color,
}

/// Green snake, red food and a yellow frame on black.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head_fg: Color::White,
    snake_head_bg: Color::Green,
    snake_body: Color::Green,
    food: Color::Red,
    border: Color::Yellow,
    hud_score: Color::Yellow,
    title: Color::Cyan,
    instructions: Color::Gray,
};
