//! StatBar widget - single-row horizontal bar filled from the left
//!
//! The percentage is drawn as-is up to the bar's width: values above 100 fill
//! the whole bar and values at or below 0 leave it empty.

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::DisplayConfig;
use crate::formatting::bar_fill_cells;

use super::RenderableWidget;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBar {
    pub percent: f64,
}

impl StatBar {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }
}

impl RenderableWidget for StatBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let filled = bar_fill_cells(self.percent, width);
        let bc = &config.box_chars;

        buf.set_string(area.x, area.y, bc.bar_filled.repeat(filled), config.accent_style());
        buf.set_string(
            area.x + filled as u16,
            area.y,
            bc.bar_empty.repeat(width - filled),
            config.muted_style(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
