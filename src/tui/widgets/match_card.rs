//! MatchCardWidget - one match drawn as a bordered card
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │ Manchester City 1-1        Liverpool │
//! │ LIVE                           20:00 │
//! ├──────────────────────────────────────┤
//! │ Match Events                         │
//! │  15'  Goal! Haaland strikes for      │
//! │       City!                          │
//! ├──────────────────────────────────────┤
//! │ Match Stats                          │
//! │ 62%          Possession          38% │
//! │ ██████████████████████░░░░░░░░░░░░░░ │
//! │ 15             Shots               7 │
//! │ █████████████████████████░░░░░░░░░░░ │
//! ├──────────────────────────────────────┤
//! │ Analysis                             │
//! │ High-intensity match with both teams │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! Events are drawn in stored order; long descriptions wrap under themselves.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::formatting::{event_rows, pad_to_width, spread_row, spread_rows, truncate_to_width, wrap_text, EVENT_MINUTE_WIDTH};
use crate::layout_constants::{CARD_FIXED_ROWS, MIN_CARD_WIDTH};
use crate::view::{MatchCard, StatLine};

use super::{RenderableWidget, StatBar};

/// Border plus one space of padding on each side
const HORIZONTAL_CHROME: u16 = 4;

#[derive(Debug, Clone)]
pub struct MatchCardWidget<'a> {
    pub card: &'a MatchCard,
    pub selected: bool,
}

impl<'a> MatchCardWidget<'a> {
    pub fn new(card: &'a MatchCard) -> Self {
        Self { card, selected: false }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn inner_width(width: u16) -> usize {
        width.saturating_sub(HORIZONTAL_CHROME) as usize
    }

    fn header_lines(&self, width: u16) -> Vec<String> {
        let card = self.card;
        spread_rows(&card.home_team, &card.score, &card.away_team, Self::inner_width(width))
    }

    fn event_lines(&self, width: u16) -> Vec<Vec<String>> {
        let inner = Self::inner_width(width);
        self.card
            .events
            .iter()
            .map(|e| event_rows(&e.minute_label(), &e.description, inner))
            .collect()
    }

    fn analysis_lines(&self, width: u16) -> Vec<String> {
        wrap_text(&self.card.analysis, Self::inner_width(width))
    }

    /// Rows needed to draw the card at `width` columns, saturating at `u16::MAX`
    pub fn height(&self, width: u16) -> u16 {
        let event_rows: usize = self.event_lines(width).iter().map(Vec::len).sum();
        let rows = CARD_FIXED_ROWS as usize
            + self.header_lines(width).len()
            + event_rows
            + self.analysis_lines(width).len();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

/// Writes the rows of one card, top to bottom
struct CardPainter<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    y: u16,
    border_style: Style,
}

impl CardPainter<'_> {
    fn inner(&self) -> usize {
        MatchCardWidget::inner_width(self.area.width)
    }

    fn rule(&mut self, left: &str, fill: &str, right: &str) {
        let line = format!(
            "{}{}{}",
            left,
            fill.repeat(self.area.width.saturating_sub(2) as usize),
            right
        );
        self.buf.set_string(self.area.x, self.y, line, self.border_style);
        self.y += 1;
    }

    /// Draw the side borders and `content`; returns the row's y
    fn row(&mut self, content: &str, style: Style, vertical: &str) -> u16 {
        let y = self.y;
        let x = self.area.x;
        self.buf.set_string(x, y, vertical, self.border_style);
        self.buf.set_string(x + 1, y, " ", Style::default());
        self.buf.set_string(x + 2, y, pad_to_width(content, self.inner()), style);
        self.buf.set_string(x + self.area.width - 2, y, " ", Style::default());
        self.buf.set_string(x + self.area.width - 1, y, vertical, self.border_style);
        self.y += 1;
        y
    }
}

impl RenderableWidget for MatchCardWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < MIN_CARD_WIDTH || area.height < self.height(area.width) {
            return;
        }

        let bc = &config.box_chars;
        let card = self.card;
        let inner = Self::inner_width(area.width);
        let title_style = config.accent_style().add_modifier(Modifier::BOLD);
        let border_style = if self.selected {
            config.selection_style()
        } else {
            config.muted_style()
        };
        let mut p = CardPainter { buf, area, y: area.y, border_style };

        p.rule(&bc.top_left, &bc.horizontal, &bc.top_right);

        // Header: teams and score, then status and kick-off time
        for line in self.header_lines(area.width) {
            p.row(&line, config.text_style().add_modifier(Modifier::BOLD), &bc.vertical);
        }
        let y = p.row(
            &spread_row(card.status.label(), "", &card.start_time, inner),
            config.text_style(),
            &bc.vertical,
        );
        p.buf.set_string(area.x + 2, y, card.status.label(), title_style);
        p.rule(&bc.left_junction, &bc.horizontal, &bc.right_junction);

        p.row("Match Events", title_style, &bc.vertical);
        for rows in self.event_lines(area.width) {
            for (i, line) in rows.iter().enumerate() {
                let y = p.row(line, config.text_style(), &bc.vertical);
                if i == 0 {
                    let minute = truncate_to_width(line, EVENT_MINUTE_WIDTH.min(inner));
                    p.buf.set_string(area.x + 2, y, minute, config.accent_style());
                }
            }
        }
        p.rule(&bc.left_junction, &bc.horizontal, &bc.right_junction);

        p.row("Match Stats", title_style, &bc.vertical);
        for stat in [&card.possession, &card.shots] {
            render_stat(&mut p, stat, config);
        }
        p.rule(&bc.left_junction, &bc.horizontal, &bc.right_junction);

        p.row("Analysis", title_style, &bc.vertical);
        for line in self.analysis_lines(area.width) {
            p.row(&line, config.text_style(), &bc.vertical);
        }
        p.rule(&bc.bottom_left, &bc.horizontal, &bc.bottom_right);
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(MIN_CARD_WIDTH)
    }
}

fn render_stat(p: &mut CardPainter<'_>, stat: &StatLine, config: &DisplayConfig) {
    let inner = p.inner();
    let vertical = config.box_chars.vertical.clone();
    p.row(
        &spread_row(&stat.home_value, stat.label, &stat.away_value, inner),
        config.text_style(),
        &vertical,
    );
    let y = p.row("", config.text_style(), &vertical);
    let bar_area = Rect::new(p.area.x + 2, y, inner as u16, 1);
    StatBar::new(stat.home_bar_percent).render(bar_area, p.buf, config);
}
