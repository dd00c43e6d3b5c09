//! Shared layout constants used across CLI and TUI components.

/// Width of a match card printed by the `matches` command
pub const CLI_CARD_WIDTH: usize = 80;

/// Smallest width a match card can be drawn at in the TUI
pub const MIN_CARD_WIDTH: u16 = 40;

/// Widest a match card gets in the TUI
pub const MAX_CARD_WIDTH: u16 = 100;

/// Rows a card uses besides its team rows, event rows and analysis lines
/// (borders, status row, section titles, separators, stat rows)
pub const CARD_FIXED_ROWS: u16 = 13;

/// Gap between stacked cards
pub const CARD_GAP: u16 = 1;

/// Height of the title bar at the top of the dashboard
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Height of the key-hint status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;
