/// Draws the whole dashboard into a buffer
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::trace;

use crate::config::DisplayConfig;
use crate::layout_constants::{CARD_GAP, MAX_CARD_WIDTH, MIN_CARD_WIDTH, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crate::view::MatchCard;

use super::app::App;
use super::widgets::{render_section_header, MatchCardWidget, RenderableWidget, StatusBar, TitleBar};

/// Left margin of the body
const BODY_MARGIN: u16 = 1;

pub fn render(area: Rect, buf: &mut Buffer, app: &App, cards: &[MatchCard], config: &DisplayConfig) {
    if area.height < TITLE_BAR_HEIGHT + STATUS_BAR_HEIGHT + 1 {
        return;
    }

    let title_area = Rect::new(area.x, area.y, area.width, TITLE_BAR_HEIGHT);
    TitleBar.render(title_area, buf, config);

    let status_area = Rect::new(area.x, area.bottom() - STATUS_BAR_HEIGHT, area.width, STATUS_BAR_HEIGHT);
    StatusBar::new()
        .with_position(app.selected, cards.len())
        .render(status_area, buf, config);

    let body = Rect::new(
        area.x,
        area.y + TITLE_BAR_HEIGHT,
        area.width,
        area.height - TITLE_BAR_HEIGHT - STATUS_BAR_HEIGHT,
    );
    let header_rows = render_section_header("Live Matches", true, BODY_MARGIN, body, body.y, buf, config);

    let cards_area = Rect::new(
        body.x + BODY_MARGIN,
        body.y + header_rows,
        body.width.saturating_sub(BODY_MARGIN * 2),
        body.height.saturating_sub(header_rows),
    );
    if cards_area.height == 0 {
        return;
    }

    if cards.is_empty() {
        buf.set_string(cards_area.x, cards_area.y, "No matches to show.", config.muted_style());
        return;
    }
    if cards_area.width < MIN_CARD_WIDTH {
        buf.set_string(cards_area.x, cards_area.y, "Terminal too narrow", config.muted_style());
        return;
    }

    render_cards(cards_area, buf, app.selected, cards, config);
}

/// Stack the cards vertically, scrolled so the selected one is visible
///
/// Only cards that intersect the viewport are drawn.
fn render_cards(area: Rect, buf: &mut Buffer, selected: usize, cards: &[MatchCard], config: &DisplayConfig) {
    let width = area.width.min(MAX_CARD_WIDTH);
    let widgets: Vec<MatchCardWidget> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| MatchCardWidget::new(card).with_selected(i == selected))
        .collect();
    let heights: Vec<u16> = widgets.iter().map(|w| w.height(width)).collect();

    let offset = scroll_offset(&heights, selected, area.height);
    let window_end = offset + area.height as usize;
    trace!("Rendering cards: offset {}, viewport {}", offset, area.height);

    let mut top = 0usize;
    for (widget, &height) in widgets.iter().zip(&heights) {
        if top >= window_end {
            break;
        }
        let bottom = top + height as usize;
        if bottom > offset {
            let mut content = Buffer::empty(Rect::new(0, 0, width, height));
            widget.render(content.area, &mut content, config);
            for row in top.max(offset)..bottom.min(window_end) {
                let src_y = (row - top) as u16;
                let dst_y = area.y + (row - offset) as u16;
                for col in 0..width {
                    buf[(area.x + col, dst_y)] = content[(col, src_y)].clone();
                }
            }
        }
        top = bottom + CARD_GAP as usize;
    }
}

/// First content row to show so that the selected card fits in `viewport` rows
///
/// A card taller than the viewport is shown from its top.
pub fn scroll_offset(heights: &[u16], selected: usize, viewport: u16) -> usize {
    let Some(&selected_height) = heights.get(selected) else {
        return 0;
    };
    let top: usize = heights[..selected]
        .iter()
        .map(|&h| h as usize + CARD_GAP as usize)
        .sum();
    let bottom = top + selected_height as usize;
    let viewport = viewport as usize;
    if bottom <= viewport {
        0
    } else {
        (bottom - viewport).min(top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeZoneSetting;
    use crate::fixtures::create_sample_matches;
    use crate::tui::action::Action;
    use crate::tui::testing::{buffer_lines, RENDER_WIDTH};

    fn sample_cards() -> Vec<MatchCard> {
        create_sample_matches()
            .iter()
            .map(|m| MatchCard::from_match(m, TimeZoneSetting::Utc))
            .collect()
    }

    fn render_to_lines(app: &App, cards: &[MatchCard], width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, app, cards, &DisplayConfig::default());
        buffer_lines(&buf)
    }

    #[test]
    fn test_scroll_offset_fits() {
        assert_eq!(scroll_offset(&[10, 10], 1, 30), 0);
    }

    #[test]
    fn test_scroll_offset_scrolls_to_selected() {
        // Second card spans rows 11..21
        assert_eq!(scroll_offset(&[10, 10], 1, 15), 6);
    }

    #[test]
    fn test_scroll_offset_tall_card_shows_top() {
        assert_eq!(scroll_offset(&[10, 40], 1, 15), 11);
    }

    #[test]
    fn test_scroll_offset_beyond_u16() {
        let heights = vec![u16::MAX; 3];
        let expected = 2 * (u16::MAX as usize + CARD_GAP as usize);
        assert_eq!(scroll_offset(&heights, 2, 20), expected);
    }

    #[test]
    fn test_many_cards_render_selected_at_end() {
        let template = sample_cards().remove(1);
        let cards: Vec<MatchCard> = (0..5_000)
            .map(|i| MatchCard { id: i, ..template.clone() })
            .collect();
        let mut app = App::new(cards.len());
        app.reduce(Action::SelectLast);

        let lines = render_to_lines(&app, &cards, RENDER_WIDTH, 30);
        assert!(lines[29].contains("Match 5000/5000"));
        assert!(lines.iter().any(|l| l.contains("Manchester City")));
    }

    #[test]
    fn test_scroll_offset_out_of_range() {
        assert_eq!(scroll_offset(&[], 0, 15), 0);
        assert_eq!(scroll_offset(&[10], 3, 15), 0);
    }

    #[test]
    fn test_dashboard_shows_both_cards() {
        let cards = sample_cards();
        let lines = render_to_lines(&App::new(cards.len()), &cards, RENDER_WIDTH, 60);
        let screen = lines.join("\n");

        assert!(lines[0].contains("SportStream Pro"));
        assert!(lines[2].contains("Live Matches"));
        assert!(screen.contains("Real Madrid"));
        assert!(screen.contains("Manchester City"));
        assert_eq!(screen.matches("Match Events").count(), 2);
        assert!(lines[59].contains("Match 1/2"));
    }

    #[test]
    fn test_dashboard_scrolls_to_second_card() {
        let cards = sample_cards();
        let mut app = App::new(cards.len());
        app.reduce(Action::SelectNext);

        let lines = render_to_lines(&app, &cards, RENDER_WIDTH, 30);
        let screen = lines.join("\n");

        assert!(screen.contains("Manchester City"));
        assert!(lines[29].contains("Match 2/2"));
    }

    #[test]
    fn test_dashboard_without_matches() {
        let lines = render_to_lines(&App::new(0), &[], RENDER_WIDTH, 20);
        assert!(lines[4].contains("No matches to show."));
        assert!(lines[19].contains("No matches"));
    }

    #[test]
    fn test_dashboard_too_narrow() {
        let cards = sample_cards();
        let lines = render_to_lines(&App::new(cards.len()), &cards, 30, 20);
        assert!(lines[4].contains("Terminal too narrow"));
    }

    #[test]
    fn test_tiny_terminal_renders_nothing() {
        let cards = sample_cards();
        let lines = render_to_lines(&App::new(cards.len()), &cards, RENDER_WIDTH, 3);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }
}
