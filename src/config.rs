use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
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

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick interval at the start of a session, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 70;

/// Milliseconds shaved off the tick interval per food eaten.
pub const TICK_INTERVAL_DECREASE_MS: u64 = 2;

/// Snake lengths at which the food rendering moves to the next stage.
///
/// Purely cosmetic: gameplay never reads these, only the renderer.
pub const GROWTH_STAGE_THRESHOLDS: [usize; 3] = [25, 50, 80];

/// Returns the cosmetic growth stage (0..=3) for a snake length.
#[must_use]
pub fn growth_stage(snake_length: usize) -> usize {
    GROWTH_STAGE_THRESHOLDS
        .iter()
        .filter(|threshold| snake_length >= **threshold)
        .count()
}

/// Glyphs used to paint board entities.
///
/// Two sets exist: the Unicode default and an ASCII fallback for terminals
/// that render block characters poorly (notably some WSL consoles).
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    /// Fill glyph for snake cells.
    pub solid: &'static str,
    /// Fill glyph for the tail cell.
    pub tail: &'static str,
    /// Food glyph per growth stage, indexed by [`growth_stage`].
    pub food_stages: [&'static str; 4],
}

pub const GLYPHS_UNICODE: GlyphSet = GlyphSet {
    solid: "█",
    tail: "▓",
    food_stages: ["●", "◆", "✦", "★"],
};

pub const GLYPHS_ASCII: GlyphSet = GlyphSet {
    solid: "#",
    tail: "+",
    food_stages: ["*", "o", "@", "%"],
};

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
