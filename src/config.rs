use ratatui::style::Color;
use ratatui::symbols::border;

use crate::error::ConfigError;
use crate::snake::Position;

/// Configured board edge in pixels.
pub const BOARD_SIZE_PX: u16 = 400;

/// Configured cell edge in pixels.
pub const CELL_SIZE_PX: u16 = 20;

/// Cell the snake starts on after every reset.
pub const START_CELL: Position = Position { x: 10, y: 10 };

/// Food position after every reset, away from the start cell.
pub const START_FOOD_CELL: Position = Position { x: 15, y: 15 };

/// Points granted per eaten food.
pub const SCORE_PER_FOOD: u32 = 10;

/// Random samples tried before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Render/input polling interval in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Square grid of `tile_count` cells per side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    tile_count: u16,
}

impl GridSize {
    /// Derives the grid from board and cell pixel sizes.
    ///
    /// The grid must be large enough to hold both fixed reset cells.
    pub fn from_pixels(board_px: u16, cell_px: u16) -> Result<Self, ConfigError> {
        if cell_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let tile_count = board_px / cell_px;
        if tile_count == 0 {
            return Err(ConfigError::BoardSmallerThanCell { board_px, cell_px });
        }

        let grid = Self { tile_count };
        for cell in [START_CELL, START_FOOD_CELL] {
            if !grid.contains(cell) {
                return Err(ConfigError::ResetCellOutsideGrid {
                    x: cell.x,
                    y: cell.y,
                    tile_count,
                });
            }
        }

        Ok(grid)
    }

    /// Builds a grid directly from a cell count. Used by tests and small boards.
    #[must_use]
    pub fn with_tile_count(tile_count: u16) -> Self {
        Self { tile_count }
    }

    #[must_use]
    pub fn tile_count(self) -> u16 {
        self.tile_count
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.tile_count) * usize::from(self.tile_count)
    }

    /// Returns true when `position` lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        let limit = i32::from(self.tile_count);
        (0..limit).contains(&position.x) && (0..limit).contains(&position.y)
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub obstacle: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on a dark field.
pub const THEME_MEADOW: Theme = Theme {
    name: "Meadow",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::LightRed,
    obstacle: Color::Gray,
    play_bg: Color::Black,
    border_fg: Color::Green,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::LightRed,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
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

/// Terminal columns used per grid cell so the board stays square.
pub const CELL_WIDTH_COLUMNS: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "()";
pub const GLYPH_OBSTACLE: &str = "▒▒";
