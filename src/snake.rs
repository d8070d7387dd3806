use std::collections::{HashSet, VecDeque};

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one step away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Snake body as an ordered segment sequence, head first.
///
/// The body carries no direction of its own; steering lives in the game
/// state and is applied per tick through [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake with no segments, the state before the first game.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            body: VecDeque::new(),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Creates a contiguous run of `length` segments with the head at the
    /// arena center, laid out opposite `direction` so the snake faces open
    /// space.
    #[must_use]
    pub fn seeded(bounds: GridSize, length: u16, direction: Direction) -> Self {
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let (dx, dy) = direction.delta();

        let body = (0..i32::from(length))
            .map(|i| Position {
                x: head.x - dx * i,
                y: head.y - dy * i,
            })
            .collect();

        Self { body }
    }

    /// Returns the current head position.
    ///
    /// Only callable while the snake has segments; movement is never run
    /// against an empty body.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must contain at least one segment")
    }

    /// Prepends `new_head`; the old tail stays only when `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true when any coordinate appears more than once in the body.
    ///
    /// Implemented as a distinct-count comparison, so a duplicate anywhere
    /// in the sequence signals the collision, not only one at the head.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        let distinct: HashSet<Position> = self.body.iter().copied().collect();
        distinct.len() != self.body.len()
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
