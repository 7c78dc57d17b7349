use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{DeathReason, GameSnapshot};

/// Draws the end-of-game summary centered in `area`.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &GameSnapshot<'_>,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let info = Style::new().fg(theme.hud_score);
    let lines = vec![
        Line::styled(
            "GAME OVER!",
            Style::new().fg(theme.food).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("Final Score: {}", snapshot.score), info),
        Line::styled(format!("Snake Length: {}", snapshot.length()), info),
        Line::styled(death_cause(snapshot.death_reason), info),
        Line::from(""),
        Line::styled("Press any key to exit...", Style::new().fg(theme.instructions)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}
