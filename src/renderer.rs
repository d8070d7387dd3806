use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_APPLE, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GameState, Phase};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders one full frame from the engine's read-only surface.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_apples(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.phase {
        Phase::NotStarted => render_start_menu(frame, play_area, state.max_score, theme),
        Phase::Paused => render_pause_menu(frame, play_area, theme),
        Phase::GameOver => {
            render_game_over_menu(frame, play_area, state.score, state.max_score, theme);
        }
        Phase::Playing => {}
    }
}

fn render_apples(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for position in state.apples.positions() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *position) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_APPLE, Style::new().fg(theme.apple));
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    if state.snake.is_empty() {
        return;
    }

    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(state.direction);
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
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

/// Maps a logical grid cell to a terminal cell inside `inner`.
///
/// Returns `None` for positions outside the arena or the visible area, so
/// a dead snake's out-of-bounds head simply isn't drawn.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
