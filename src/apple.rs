use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random placement attempts before falling back to free-cell enumeration.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Raised when apple placement is requested on a board with no free cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the {width}x{height} board")]
pub struct NoCapacity {
    pub width: u16,
    pub height: u16,
}

/// Unordered set of apple positions, disjoint from the snake body.
#[derive(Debug, Clone)]
pub struct AppleSet {
    cells: HashSet<Position>,
}

impl AppleSet {
    /// Creates a set with no apples, the state before the first game.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: HashSet::new(),
        }
    }

    /// Creates a set from explicit positions.
    #[must_use]
    pub fn from_positions<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        Self {
            cells: positions.into_iter().collect(),
        }
    }

    /// Seeds `count` apples in cells free of the snake and of each other.
    pub fn seed<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        count: usize,
    ) -> Result<Self, NoCapacity> {
        let mut apples = Self::empty();
        for _ in 0..count {
            apples.replenish(rng, bounds, snake)?;
        }
        Ok(apples)
    }

    /// Places one additional apple in a free cell.
    pub fn replenish<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<(), NoCapacity> {
        let position = free_position(rng, bounds, snake, &self.cells)?;
        self.cells.insert(position);
        Ok(())
    }

    /// Returns true when an apple occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Removes the apple at `position`; returns whether one was there.
    pub fn remove(&mut self, position: Position) -> bool {
        self.cells.remove(&position)
    }

    /// Returns the number of apples on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when the board holds no apples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over apple positions in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

/// Samples a cell occupied by neither the snake nor an existing apple.
///
/// Rejection sampling is capped at [`MAX_SAMPLE_ATTEMPTS`]; after that the
/// remaining free cells are enumerated outright, so placement terminates
/// even on a nearly full board instead of resampling forever.
fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    taken: &HashSet<Position>,
) -> Result<Position, NoCapacity> {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    let is_free =
        |position: Position| !snake.occupies(position) && !taken.contains(&position);

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if is_free(candidate) {
            return Ok(candidate);
        }
    }

    let mut free = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if is_free(position) {
                free.push(position);
            }
        }
    }

    if free.is_empty() {
        return Err(NoCapacity {
            width: bounds.width,
            height: bounds.height,
        });
    }

    Ok(free[rng.gen_range(0..free.len())])
}
