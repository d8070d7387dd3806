use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// A coordinate `(x, y)` is in bounds iff `0 <= x < width` and
/// `0 <= y < height`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default arena width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default arena height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Number of apples kept on the board while a game is running.
pub const DEFAULT_APPLE_COUNT: usize = 3;

/// Tick rate at the start of a game, in ticks per second.
pub const INITIAL_TICKS_PER_SECOND: f32 = 10.0;

/// Tick-rate gain per apple eaten, in ticks per second.
///
/// Exactly representable in `f32`, so repeated gains stay deterministic.
pub const SPEED_GAIN_PER_APPLE: f32 = 0.25;

/// Ceiling applied by the driver when converting speed to a tick interval.
pub const MAX_TICKS_PER_SECOND: f32 = 30.0;

/// Interval between input polls in the driver loop, in milliseconds.
pub const INPUT_POLL_INTERVAL_MS: u64 = 15;

/// Tick interval while a menu or pause screen is up, in milliseconds.
pub const MENU_TICK_INTERVAL_MS: u64 = 33;

/// Apple glyph.
pub const GLYPH_APPLE: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Head glyphs by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub apple: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

impl Theme {
    /// Looks a theme up by its (case-insensitive) name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    apple: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Pastel pink board with a dark snake.
pub const THEME_BLOSSOM: Theme = Theme {
    name: "blossom",
    snake_head: Color::Black,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    apple: Color::Red,
    play_bg: Color::Rgb(252, 232, 247),
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes, first entry is the default.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_BLOSSOM];

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Side columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
