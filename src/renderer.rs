use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, CHROME_COLS, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
    GLYPH_WALL_HORIZONTAL, GLYPH_WALL_VERTICAL,
};
use crate::game::GameSnapshot;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{render_instructions, render_score_line, render_title};
use crate::ui::menu::render_game_over_menu;

const BOARD_MARGIN_X: u16 = CHROME_COLS / 2;

/// Renders the full game frame from an immutable snapshot.
///
/// Everything is offset by a left margin only; text rows may run past the
/// board's right wall up to the terminal edge.
pub fn render(frame: &mut Frame<'_>, snapshot: &GameSnapshot<'_>, theme: &Theme) {
    let area = inset_left(frame.area(), BOARD_MARGIN_X);
    let [title_area, score_area, board_area, _, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(snapshot.bounds.height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, title_area, snapshot.bounds.width, theme);
    render_score_line(frame, score_area, snapshot, theme);
    render_walls(frame, board_area, snapshot.bounds, theme);
    render_food(frame, board_area, snapshot, theme);
    render_snake(frame, board_area, snapshot, theme);
    render_instructions(frame, help_area, theme);
}

/// Renders the game-over summary over the whole screen.
pub fn render_game_over(frame: &mut Frame<'_>, snapshot: &GameSnapshot<'_>, theme: &Theme) {
    let area = frame.area();
    render_game_over_menu(frame, area, snapshot, theme);
}

fn render_walls(frame: &mut Frame<'_>, board: Rect, bounds: GridSize, theme: &Theme) {
    let style = Style::new().fg(theme.border);
    let last_row = i32::from(bounds.height) - 1;
    let last_col = i32::from(bounds.width) - 1;

    let buffer = frame.buffer_mut();
    for row in 0..=last_row {
        for col in 0..=last_col {
            let glyph = if row == 0 || row == last_row {
                GLYPH_WALL_HORIZONTAL
            } else if col == 0 || col == last_col {
                GLYPH_WALL_VERTICAL
            } else {
                continue;
            };

            if let Some((x, y)) = cell_to_terminal(board, Position { row, col }) {
                buffer.set_string(x, y, glyph, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, board: Rect, snapshot: &GameSnapshot<'_>, theme: &Theme) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(board, food) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, board: Rect, snapshot: &GameSnapshot<'_>, theme: &Theme) {
    let has_tail = snapshot.length() > 1;
    let tail = snapshot.snake.tail();
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.body().enumerate() {
        let Some((x, y)) = cell_to_terminal(board, segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(theme.snake_head_fg)
                    .bg(theme.snake_head_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else if has_tail && segment == tail {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_body))
        } else {
            (
                GLYPH_SNAKE_BODY,
                Style::new()
                    .fg(theme.snake_body)
                    .add_modifier(Modifier::BOLD),
            )
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn inset_left(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width);
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width - margin,
        height: area.height,
    }
}

/// Maps a grid cell to a terminal coordinate, or `None` when it is clipped.
fn cell_to_terminal(board: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.col).ok()?;
    let y_offset = u16::try_from(position.row).ok()?;

    let x = board.x.saturating_add(x_offset);
    let y = board.y.saturating_add(y_offset);
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
