use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake steering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit grid offset of one step in this direction.
    ///
    /// The y axis grows downward, matching terminal rows.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Symbolic actions consumed by the engine, one per keyboard event.
///
/// This closed set is the whole contract between input decoding and the
/// simulation; the engine never sees raw key codes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    Direction(Direction),
    Space,
    Enter,
    Escape,
    Quit,
}

/// Maps one terminal key event to a symbolic action.
///
/// Keys outside the action vocabulary map to `None` and are dropped.
/// Only press events are considered, so platforms that also report key
/// releases do not double-fire.
#[must_use]
pub fn decode_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Action::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Action::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(Action::Space),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Drains all pending terminal events into symbolic actions.
///
/// Blocks up to `timeout` for the first event, then collects whatever else
/// is already queued without further waiting.
pub fn poll_actions(timeout: Duration) -> io::Result<Vec<Action>> {
    let mut actions = Vec::new();
    let mut wait = timeout;

    while event::poll(wait)? {
        wait = Duration::ZERO;
        if let Event::Key(key) = event::read()? {
            if let Some(action) = decode_key(key) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{decode_key, Action, Direction};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn arrows_and_wasd_decode_to_directions() {
        let pairs = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('d'), Direction::Right),
        ];

        for (code, direction) in pairs {
            let decoded = decode_key(KeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(decoded, Some(Action::Direction(direction)));
        }
    }

    #[test]
    fn control_keys_decode_to_named_actions() {
        let decoded = |code| decode_key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(decoded(KeyCode::Char(' ')), Some(Action::Space));
        assert_eq!(decoded(KeyCode::Enter), Some(Action::Enter));
        assert_eq!(decoded(KeyCode::Esc), Some(Action::Escape));
        assert_eq!(decoded(KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_decodes_to_quit() {
        let decoded = decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(decoded, Some(Action::Quit));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert!(decode_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)).is_none());
        assert!(decode_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)).is_none());
        assert!(decode_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)).is_none());
    }
}
