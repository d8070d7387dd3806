use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::AppleSet;
use crate::config::{
    GridSize, INITIAL_SNAKE_LENGTH, INITIAL_TICKS_PER_SECOND, SPEED_GAIN_PER_APPLE,
};
use crate::input::{Action, Direction};
use crate::snake::Snake;

/// Direction a fresh snake faces after a new-game reset.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Coarse game phase gating which inputs are meaningful.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

/// Complete mutable game state for one process run.
///
/// Created once at startup and reinitialized in place on every new game.
/// `max_score` and the RNG survive resets; everything else is rebuilt by
/// the next enter-at-menu transition.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub direction: Direction,
    pub snake: Snake,
    pub apples: AppleSet,
    pub score: u32,
    /// Highest score reached in this process, across games.
    pub max_score: u32,
    /// Tick rate in ticks per second; grows with every apple eaten.
    pub speed: f32,
    running: bool,
    bounds: GridSize,
    apple_count: usize,
    rng: StdRng,
}

impl GameState {
    /// Creates the initial pre-game state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, apple_count: usize) -> Self {
        Self::from_rng(bounds, apple_count, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, apple_count: usize, seed: u64) -> Self {
        Self::from_rng(bounds, apple_count, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, apple_count: usize, rng: StdRng) -> Self {
        Self {
            phase: Phase::NotStarted,
            direction: INITIAL_DIRECTION,
            snake: Snake::empty(),
            apples: AppleSet::empty(),
            score: 0,
            max_score: 0,
            speed: INITIAL_TICKS_PER_SECOND,
            running: true,
            bounds,
            apple_count,
            rng,
        }
    }

    /// Returns the arena dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns false once a quit (or escape at a menu) has been processed.
    /// A stopped state ignores all further ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the simulation by one discrete tick.
    ///
    /// All actions gathered since the previous tick are considered: quit
    /// first regardless of arrival order, then the rest in arrival order.
    /// The snake takes one step only when the phase was Playing before the
    /// inputs were applied and still is afterwards, so a tick that starts,
    /// resumes, or pauses a game never moves the snake as a side effect.
    pub fn advance(&mut self, inputs: &[Action]) {
        if !self.running {
            return;
        }

        if inputs.contains(&Action::Quit) {
            self.running = false;
            return;
        }

        let was_playing = self.phase == Phase::Playing;

        for &action in inputs {
            self.apply_action(action);
            if !self.running {
                return;
            }
        }

        if was_playing && self.phase == Phase::Playing {
            self.step();
        }
    }

    fn apply_action(&mut self, action: Action) {
        match (self.phase, action) {
            (Phase::NotStarted | Phase::GameOver, Action::Escape) => self.running = false,
            (Phase::NotStarted | Phase::GameOver, Action::Enter) => self.start_game(),
            (Phase::Playing, Action::Escape | Action::Space) => self.phase = Phase::Paused,
            // Escape from pause abandons the game rather than restarting it.
            (Phase::Paused, Action::Escape) => self.phase = Phase::GameOver,
            (Phase::Paused, Action::Space) => self.phase = Phase::Playing,
            // Steering is unconditional: a reversal into the neck is legal
            // input and self-collides when the step is taken.
            (Phase::Playing, Action::Direction(direction)) => self.direction = direction,
            _ => {}
        }
    }

    /// Rebuilds the board for a fresh game, keeping `max_score`.
    fn start_game(&mut self) {
        self.snake = Snake::seeded(self.bounds, INITIAL_SNAKE_LENGTH, INITIAL_DIRECTION);
        self.direction = INITIAL_DIRECTION;
        self.score = 0;
        self.speed = INITIAL_TICKS_PER_SECOND;

        match AppleSet::seed(&mut self.rng, self.bounds, &self.snake, self.apple_count) {
            Ok(apples) => {
                self.apples = apples;
                self.phase = Phase::Playing;
            }
            // Only reachable when the configured board cannot hold the
            // snake plus its apples; such a game is over before it begins.
            Err(_) => {
                self.apples = AppleSet::empty();
                self.phase = Phase::GameOver;
            }
        }
    }

    /// One movement step: slither or grow, then collide, then eat.
    fn step(&mut self) {
        let new_head = self.snake.head().step(self.direction);

        // Growth is decided against the apple set as it stands before the
        // bite is resolved, so the tail stays put on an eating tick.
        let growing = self.apples.contains(new_head);
        self.snake.advance(new_head, growing);

        if !new_head.is_within_bounds(self.bounds) || self.snake.has_overlap() {
            self.phase = Phase::GameOver;
            return;
        }

        if growing {
            self.apples.remove(new_head);
            self.score += 1;
            self.max_score = self.max_score.max(self.score);
            self.speed += SPEED_GAIN_PER_APPLE;

            if self
                .apples
                .replenish(&mut self.rng, self.bounds, &self.snake)
                .is_err()
            {
                // Board packed solid: nothing left to chase.
                self.phase = Phase::GameOver;
            }
        }
    }
}
