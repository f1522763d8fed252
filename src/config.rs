use ratatui::style::Color;
use ratatui::symbols::border;

/// Default number of grid rows.
pub const DEFAULT_NUM_ROWS: u16 = 20;

/// Default number of grid columns.
pub const DEFAULT_NUM_COLS: u16 = 20;

/// Snake length at the start of every game.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick interval at the start of a game, in milliseconds.
pub const SLOWEST_INTERVAL_MS: u64 = 400;

/// Tick interval floor, in milliseconds.
pub const FASTEST_INTERVAL_MS: u64 = 80;

/// Amount the tick interval shrinks per food eaten, in milliseconds.
pub const SPEED_INCREMENT_MS: u64 = 20;

/// How long the terminal loop waits for input before redrawing.
pub const INPUT_POLL_MS: u64 = 16;

/// Directory under the platform data dir that holds the log file.
pub const APP_DIR_NAME: &str = "grid-snake";

/// Log file name inside [`APP_DIR_NAME`].
pub const LOG_FILE_NAME: &str = "grid-snake.log";

/// Glyph for an empty cell (two columns wide so cells look square).
pub const GLYPH_EMPTY: &str = "  ";

/// Glyph for a body segment.
pub const GLYPH_BODY: &str = "██";

/// Glyph for the head segment.
pub const GLYPH_HEAD: &str = "██";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "██";

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub empty: Color,
    pub body: Color,
    pub head: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub popup_title: Color,
    pub popup_footer: Color,
}

/// Green snake on a white board with red food.
pub const THEME_CLASSIC: Theme = Theme {
    empty: Color::White,
    body: Color::Green,
    head: Color::LightGreen,
    food: Color::Red,
    border_fg: Color::Red,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    popup_title: Color::Green,
    popup_footer: Color::DarkGray,
};

/// Plain border set around the play area.
pub const BORDER_PLAY_AREA: border::Set = border::PLAIN;
