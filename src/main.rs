use std::io;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;

use grid_snake::config::{
    DEFAULT_APPLE_COUNT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize,
    INITIAL_SNAKE_LENGTH, INPUT_POLL_INTERVAL_MS, MAX_TICKS_PER_SECOND, MENU_TICK_INTERVAL_MS,
    THEMES, Theme,
};
use grid_snake::game::{GameState, Phase};
use grid_snake::input::{self, Action};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Arena width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Arena height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Number of apples kept on the board.
    #[arg(long, default_value_t = DEFAULT_APPLE_COUNT)]
    apples: usize,

    /// RNG seed for reproducible apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme (classic, blossom).
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let (bounds, theme) = match validate(&cli) {
        Ok(validated) => validated,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, cli.apples, seed),
        None => GameState::new(bounds, cli.apples),
    };

    run(&mut state, theme)
}

fn validate(cli: &Cli) -> Result<(GridSize, &'static Theme), String> {
    if cli.width < 8 || cli.height < 8 {
        return Err("arena must be at least 8x8 cells".into());
    }

    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };

    if cli.apples == 0 {
        return Err("at least one apple is required".into());
    }
    if cli.apples + usize::from(INITIAL_SNAKE_LENGTH) > bounds.total_cells() / 2 {
        return Err(format!(
            "{} apples do not leave enough room on a {}x{} board",
            cli.apples, cli.width, cli.height
        ));
    }

    let Some(theme) = Theme::by_name(&cli.theme) else {
        let names: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
        return Err(format!(
            "unknown theme {:?}, expected one of: {}",
            cli.theme,
            names.join(", ")
        ));
    };

    Ok((bounds, theme))
}

fn run(state: &mut GameState, theme: &'static Theme) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut pending: Vec<Action> = Vec::new();
    let mut last_tick = Instant::now();

    while state.is_running() {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state, theme))?;

        pending.extend(input::poll_actions(Duration::from_millis(
            INPUT_POLL_INTERVAL_MS,
        ))?);

        // Quit abandons the in-progress tick instead of waiting out the
        // remaining interval.
        if pending.contains(&Action::Quit) {
            state.advance(&pending);
            break;
        }

        if last_tick.elapsed() >= tick_interval(state) {
            state.advance(&pending);
            pending.clear();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Converts the engine's ticks-per-second speed into a tick interval.
///
/// Menus and the pause screen tick at a fixed rate so they stay responsive
/// independent of how fast the last game got.
fn tick_interval(state: &GameState) -> Duration {
    match state.phase {
        Phase::Playing => {
            let ticks = state.speed.clamp(1.0, MAX_TICKS_PER_SECOND);
            Duration::from_secs_f32(ticks.recip())
        }
        _ => Duration::from_millis(MENU_TICK_INTERVAL_MS),
    }
}
