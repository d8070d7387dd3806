use grid_snake::apple::AppleSet;
use grid_snake::config::{GridSize, INITIAL_TICKS_PER_SECOND};
use grid_snake::game::{GameState, Phase};
use grid_snake::input::{Action, Direction};
use grid_snake::snake::{Position, Snake};

fn arena() -> GridSize {
    GridSize {
        width: 10,
        height: 10,
    }
}

/// A centered, rightward-facing game with one apple out of the way.
fn centered_game(seed: u64) -> GameState {
    let mut state = GameState::new_with_seed(arena(), 1, seed);
    state.phase = Phase::Playing;
    state.direction = Direction::Right;
    state.snake = Snake::seeded(arena(), 3, Direction::Right);
    state.apples = AppleSet::from_positions([Position { x: 0, y: 0 }]);
    state
}

#[test]
fn slither_tick_moves_the_head_without_growing() {
    let mut state = centered_game(42);

    state.advance(&[]);

    assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    assert_eq!(state.snake.len(), 3);
    assert!(!state.snake.occupies(Position { x: 3, y: 5 }));
    assert_eq!(state.score, 0);
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn apple_under_the_next_head_grows_scores_and_speeds_up() {
    let mut state = centered_game(42);
    state.apples = AppleSet::from_positions([Position { x: 6, y: 5 }]);

    state.advance(&[]);

    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.score, 1);
    assert!(state.speed > INITIAL_TICKS_PER_SECOND);

    // Exactly one apple again, and not the one just eaten.
    assert_eq!(state.apples.len(), 1);
    assert!(!state.apples.contains(Position { x: 6, y: 5 }));
}

#[test]
fn head_leaving_the_arena_ends_the_game() {
    let mut state = centered_game(42);
    state.direction = Direction::Left;
    state.snake = Snake::from_segments(vec![
        Position { x: 0, y: 5 },
        Position { x: 1, y: 5 },
    ]);

    state.advance(&[]);

    assert_eq!(state.phase, Phase::GameOver);
}

#[test]
fn enter_at_the_menu_populates_a_fresh_disjoint_board() {
    let mut state = GameState::new_with_seed(arena(), 3, 7);

    state.advance(&[Action::Enter]);

    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.speed, INITIAL_TICKS_PER_SECOND);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.apples.len(), 3);
    for apple in state.apples.positions() {
        assert!(!state.snake.occupies(*apple));
    }
}

#[test]
fn pause_resume_is_a_true_toggle() {
    let mut state = centered_game(42);

    state.advance(&[Action::Space]);
    assert_eq!(state.phase, Phase::Paused);

    state.advance(&[Action::Space]);
    assert_eq!(state.phase, Phase::Playing);

    state.advance(&[Action::Space]);
    assert_eq!(state.phase, Phase::Paused);
}

/// Boustrophedon steering over the lower half of the board: down from the
/// start row, then right along even rows and left along odd rows, stepping
/// down at each edge. The path never revisits a cell, so the run ends at
/// the bottom wall no matter how long the snake has grown.
fn sweep_steering(head: Position, bounds: GridSize) -> Direction {
    let last_x = i32::from(bounds.width) - 1;
    let start_y = i32::from(bounds.height / 2);

    if head.y == start_y {
        Direction::Down
    } else if head.y % 2 == 0 {
        if head.x < last_x {
            Direction::Right
        } else {
            Direction::Down
        }
    } else if head.x > 0 {
        Direction::Left
    } else {
        Direction::Down
    }
}

#[test]
fn invariants_hold_across_a_driven_game() {
    let mut state = GameState::new_with_seed(arena(), 2, 1234);
    state.advance(&[Action::Enter]);

    let apple_count = state.apples.len();
    let initial_length = state.snake.len();
    let mut last_score = state.score;
    let mut last_speed = state.speed;
    let mut ticks = 0;

    while state.phase == Phase::Playing {
        ticks += 1;
        assert!(ticks < 500, "sweep should hit the bottom wall");

        let steering = sweep_steering(state.snake.head(), state.bounds());
        state.advance(&[Action::Direction(steering)]);

        if state.phase != Phase::Playing {
            break;
        }

        // Bounds and distinctness hold on every playing tick.
        assert!(state.snake.head().is_within_bounds(state.bounds()));
        assert!(!state.snake.has_overlap());

        // Eaten apples are replaced synchronously.
        assert_eq!(state.apples.len(), apple_count);
        for apple in state.apples.positions() {
            assert!(!state.snake.occupies(*apple));
        }

        // Score and speed never decrease; growth matches consumption.
        assert!(state.score >= last_score);
        assert!(state.speed >= last_speed);
        assert_eq!(state.snake.len(), initial_length + state.score as usize);
        assert_eq!(state.max_score, state.score);

        last_score = state.score;
        last_speed = state.speed;
    }

    assert_eq!(state.phase, Phase::GameOver);
}

#[test]
fn quit_wins_over_everything_else_in_the_same_tick() {
    let mut state = GameState::new_with_seed(arena(), 1, 3);

    state.advance(&[Action::Enter, Action::Quit]);

    assert!(!state.is_running());
    assert_eq!(state.phase, Phase::NotStarted);
}
