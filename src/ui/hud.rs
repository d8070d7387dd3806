use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    let line = Line::from(vec![
        Span::styled(" score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  best ", label),
        Span::styled(state.max_score.to_string(), value),
        Span::styled("  speed ", label),
        Span::styled(format!("{:.2}", state.speed), value),
        Span::styled("  length ", label),
        Span::styled(state.snake.len().to_string(), value),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), hud_area);

    play_area
}
