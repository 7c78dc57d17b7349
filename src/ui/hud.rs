use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, GLYPH_TITLE_RULE};
use crate::game::GameSnapshot;

const TITLE: &str = "[ SNAKE GAME ]";
const INSTRUCTIONS: &str = "Arrow keys: move | q: quit";

/// Draws the title between two rules spanning `board_width` columns.
///
/// `area` must be three rows tall.
pub fn render_title(frame: &mut Frame<'_>, area: Rect, board_width: u16, theme: &Theme) {
    let style = Style::new().fg(theme.title).add_modifier(Modifier::BOLD);
    let rule_width = board_width.min(area.width);
    let rule = GLYPH_TITLE_RULE.repeat(usize::from(rule_width));

    let lines = vec![
        Line::styled(rule.clone(), style),
        Line::styled(centered(TITLE, rule_width), style),
        Line::styled(rule, style),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draws the `Score | Length` line.
pub fn render_score_line(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &GameSnapshot<'_>,
    theme: &Theme,
) {
    frame.render_widget(Paragraph::new(score_line(snapshot, theme)), area);
}

/// Draws the key help below the board.
pub fn render_instructions(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::styled(INSTRUCTIONS, Style::new().fg(theme.instructions))),
        area,
    );
}

fn score_line(snapshot: &GameSnapshot<'_>, theme: &Theme) -> Line<'static> {
    let style = Style::new().fg(theme.hud_score);
    Line::from(vec![
        Span::styled(format!("Score: {}", snapshot.score), style),
        Span::styled("  |  ", style),
        Span::styled(format!("Length: {}", snapshot.length()), style),
    ])
}

/// Left-pads `text` so it sits in the middle of `width` columns.
pub(crate) fn centered(text: &str, width: u16) -> String {
    let pad = usize::from(width).saturating_sub(text.width()) / 2;
    format!("{}{text}", " ".repeat(pad))
}
