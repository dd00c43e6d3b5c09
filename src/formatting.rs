use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for card borders and stat bars
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_junction: String,
    pub right_junction: String,
    pub bar_filled: String,
    pub bar_empty: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            bar_filled: "█".to_string(),
            bar_empty: "░".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            bar_filled: "#".to_string(),
            bar_empty: ".".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Number of filled cells for a bar of `width` cells at `percent`
///
/// Only the cell count is clamped to the bar; the percentage itself may be
/// anything (possession is shown verbatim even above 100).
pub fn bar_fill_cells(percent: f64, width: usize) -> usize {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    let cells = (percent.min(100.0) / 100.0 * width as f64).round() as usize;
    cells.min(width)
}

/// Format a stat bar filled from the left up to `percent`
pub fn format_stat_bar(percent: f64, width: usize, display: &DisplayConfig) -> String {
    let filled = bar_fill_cells(percent, width);
    format!(
        "{}{}",
        display.box_chars.bar_filled.repeat(filled),
        display.box_chars.bar_empty.repeat(width - filled)
    )
}

/// Cut `text` so it occupies at most `width` terminal columns
///
/// Measured on the whole prefix, so zero-width selectors that widen the
/// preceding character (`\u{2764}\u{FE0F}`) are accounted for.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if out.width() > width {
            out.pop();
            break;
        }
    }
    out
}

/// Pad `text` with spaces up to `width` columns, truncating if it is wider
pub fn pad_to_width(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(fill))
}

fn spread_fits(left: &str, center: &str, right: &str, width: usize) -> bool {
    let (wl, wc, wr) = (left.width(), center.width(), right.width());
    let center_start = width.saturating_sub(wc) / 2;
    wl < center_start && center_start + wc + 1 + wr <= width
}

/// Lay out a row with `left` flush left, `center` centered and `right` flush right
///
/// When the three parts do not fit around a true center they are packed with
/// single spaces and the row is truncated.
pub fn spread_row(left: &str, center: &str, right: &str, width: usize) -> String {
    if !spread_fits(left, center, right, width) {
        let packed = [left, center, right]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        return pad_to_width(&packed, width);
    }

    let (wl, wc, wr) = (left.width(), center.width(), right.width());
    let center_start = width.saturating_sub(wc) / 2;
    let center_end = center_start + wc;
    format!(
        "{}{}{}{}{}",
        left,
        " ".repeat(center_start - wl),
        center,
        " ".repeat(width - center_end - wr),
        right
    )
}

/// Like [`spread_row`], but wraps onto several rows instead of truncating
pub fn spread_rows(left: &str, center: &str, right: &str, width: usize) -> Vec<String> {
    if spread_fits(left, center, right, width) {
        return vec![spread_row(left, center, right, width)];
    }
    let packed = [left, center, right]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    wrap_text(&packed, width)
}

/// Columns taken by the right-aligned minute in an event row
pub const EVENT_MINUTE_WIDTH: usize = 4;

/// Columns before an event description (minute plus a two space gap)
pub const EVENT_INDENT: usize = EVENT_MINUTE_WIDTH + 2;

/// Rows for one event: the minute, then the description wrapped under itself
pub fn event_rows(minute: &str, description: &str, width: usize) -> Vec<String> {
    if width <= EVENT_INDENT {
        return wrap_text(&format!("{} {}", minute, description), width);
    }

    let mut lines = wrap_text(description, width - EVENT_INDENT).into_iter();
    let first = lines.next().unwrap_or_default();
    let mut rows = vec![format!("{:>w$}  {}", minute, first, w = EVENT_MINUTE_WIDTH)];
    rows.extend(lines.map(|line| format!("{}{}", " ".repeat(EVENT_INDENT), line)));
    rows
}

/// Greedy word wrap to `width` columns; words wider than a line are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word;
        while rest.width() > width {
            let head = truncate_to_width(rest, width);
            if head.is_empty() {
                // a single character wider than the line
                break;
            }
            rest = &rest[head.len()..];
            lines.push(head);
        }
        current.push_str(rest);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
