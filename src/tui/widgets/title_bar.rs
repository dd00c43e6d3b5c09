/// TitleBar widget - application name on the left, tagline on the right, rule below
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use crate::config::DisplayConfig;
use crate::layout_constants::TITLE_BAR_HEIGHT;
use crate::tui::widgets::RenderableWidget;

pub const APP_TITLE: &str = "SportStream Pro";
pub const APP_TAGLINE: &str = "Live Football Coverage";

#[derive(Debug, Default)]
pub struct TitleBar;

impl RenderableWidget for TitleBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < TITLE_BAR_HEIGHT || area.width < 2 {
            return;
        }

        buf.set_string(
            area.x + 1,
            area.y,
            APP_TITLE,
            config.accent_style().add_modifier(Modifier::BOLD),
        );
        let tagline_len = APP_TAGLINE.chars().count() as u16;
        let title_len = APP_TITLE.chars().count() as u16;
        if area.width > title_len + tagline_len + 3 {
            buf.set_string(area.right() - tagline_len - 1, area.y, APP_TAGLINE, config.muted_style());
        }

        let rule = config.box_chars.horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y + 1, rule, config.muted_style());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TITLE_BAR_HEIGHT)
    }
}
