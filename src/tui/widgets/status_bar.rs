/// StatusBar widget - keyboard hints on the left, match position on the right
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use crate::config::DisplayConfig;
use crate::formatting::pad_to_width;
use crate::tui::widgets::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "q", "j/k")
    pub key: String,
    /// The action description (e.g., "Quit")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug)]
pub struct StatusBar {
    pub hints: Vec<KeyHint>,
    /// Selected card index and card count
    pub position: Option<(usize, usize)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            hints: vec![
                KeyHint::new("q", "Quit"),
                KeyHint::new("j/k", "Select"),
                KeyHint::new("g/G", "First/Last"),
            ],
            position: None,
        }
    }

    pub fn with_position(mut self, selected: usize, total: usize) -> Self {
        self.position = Some((selected, total));
        self
    }

    fn build_right_text(&self) -> String {
        match self.position {
            Some((_, 0)) | None => "No matches".to_string(),
            Some((selected, total)) => format!("Match {}/{}", selected + 1, total),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        buf.set_string(area.x, area.y, " ".repeat(width), config.text_style());

        let mut x = area.x + 1;
        for hint in &self.hints {
            let key_len = hint.key.chars().count() as u16;
            let action_len = hint.action.chars().count() as u16;
            if x + key_len + 1 + action_len >= area.right() {
                break;
            }
            buf.set_string(x, area.y, &hint.key, config.accent_style().add_modifier(Modifier::BOLD));
            buf.set_string(x + key_len + 1, area.y, &hint.action, config.muted_style());
            x += key_len + 1 + action_len + 2;
        }

        let right = self.build_right_text();
        let right_len = right.chars().count() as u16 + 1;
        if right_len < area.width && x <= area.right() - right_len {
            let right = pad_to_width(&right, right_len as usize - 1);
            buf.set_string(area.right() - right_len, area.y, right, config.text_style());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
