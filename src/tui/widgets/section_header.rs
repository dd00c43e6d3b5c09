/// SectionHeader widget - renders a formatted section header with box characters
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use crate::config::DisplayConfig;
use crate::formatting::format_header;

/// Renders a section header with an underline
///
/// Returns the number of lines rendered (height consumed)
pub fn render_section_header(
    text: &str,
    double_line: bool,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    config: &DisplayConfig,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let header_line = format_header(text, double_line, config);
    let style = config.accent_style().add_modifier(Modifier::BOLD);
    let mut lines_rendered = 0;

    for line in header_line.lines() {
        if y + lines_rendered >= area.bottom() {
            break;
        }
        if !line.is_empty() {
            let formatted = format!("{}{}", " ".repeat(margin as usize), line);
            buf.set_string(area.x, y + lines_rendered, &formatted, style);
        }
        lines_rendered += 1;
    }

    lines_rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_section_header_double_line() {
        let config = test_config();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        let lines = render_section_header("Live Matches", true, 1, area, 0, &mut buf, &config);

        assert_eq!(lines, 2);
        assert_eq!(buffer_line(&buf, 0), " Live Matches       ");
        assert_eq!(buffer_line(&buf, 1), " ════════════       ");
    }

    #[test]
    fn test_section_header_clipped_at_bottom() {
        let config = test_config();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        let lines = render_section_header("Live Matches", false, 0, area, 0, &mut buf, &config);
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_section_header_outside_area() {
        let config = test_config();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);

        assert_eq!(render_section_header("X", false, 0, area, 5, &mut buf, &config), 0);
    }
}
