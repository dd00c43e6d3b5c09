/// Widget-based rendering infrastructure for TUI
///
/// Widgets render themselves directly to a ratatui Buffer, which keeps them
/// composable and lets tests render into plain buffers.

#[cfg(test)]
pub mod testing;

pub mod match_card;
pub use match_card::MatchCardWidget;

pub mod section_header;
pub use section_header::render_section_header;

pub mod stat_bar;
pub use stat_bar::StatBar;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

pub mod title_bar;
pub use title_bar::TitleBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// This trait is object-safe, so different widget types can be stored together.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
