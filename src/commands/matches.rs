use anyhow::Result;

use crate::config::DisplayConfig;
use crate::dashboard::Dashboard;
use crate::formatting::{event_rows, format_header, format_stat_bar, pad_to_width, spread_row, spread_rows, wrap_text};
use crate::layout_constants::CLI_CARD_WIDTH;
use crate::view::{MatchCard, StatLine};

pub fn run(dashboard: &Dashboard, display: &DisplayConfig) -> Result<()> {
    let cards = dashboard.view().cards();
    print!("{}", format_matches(&cards, CLI_CARD_WIDTH, display));
    Ok(())
}

/// Format all cards under a "Live Matches" header, separated by blank lines
pub fn format_matches(cards: &[MatchCard], width: usize, display: &DisplayConfig) -> String {
    let mut output = format_header("Live Matches", true, display);
    output.push('\n');

    if cards.is_empty() {
        output.push_str("No matches to show.\n");
        return output;
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_match_card(card, width, display));
    }
    output
}

/// Format one match as a bordered text card `width` columns wide
pub fn format_match_card(card: &MatchCard, width: usize, display: &DisplayConfig) -> String {
    let bc = &display.box_chars;
    let inner = width.saturating_sub(4);
    let rule = bc.horizontal.repeat(width.saturating_sub(2));

    let mut sections: Vec<Vec<String>> = Vec::new();
    let mut header = spread_rows(&card.home_team, &card.score, &card.away_team, inner);
    header.push(spread_row(card.status.label(), "", &card.start_time, inner));
    sections.push(header);

    let mut events = vec!["Match Events".to_string()];
    for event in &card.events {
        events.extend(event_rows(&event.minute_label(), &event.description, inner));
    }
    sections.push(events);

    let mut stats = vec!["Match Stats".to_string()];
    for stat in [&card.possession, &card.shots] {
        stats.extend(format_stat_rows(stat, inner, display));
    }
    sections.push(stats);

    let mut analysis = vec!["Analysis".to_string()];
    analysis.extend(wrap_text(&card.analysis, inner));
    sections.push(analysis);

    let mut output = format!("{}{}{}\n", bc.top_left, rule, bc.top_right);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            output.push_str(&format!("{}{}{}\n", bc.left_junction, rule, bc.right_junction));
        }
        for content in section {
            output.push_str(&format!(
                "{} {} {}\n",
                bc.vertical,
                pad_to_width(content, inner),
                bc.vertical
            ));
        }
    }
    output.push_str(&format!("{}{}{}\n", bc.bottom_left, rule, bc.bottom_right));
    output
}

fn format_stat_rows(stat: &StatLine, width: usize, display: &DisplayConfig) -> [String; 2] {
    [
        spread_row(&stat.home_value, stat.label, &stat.away_value, width),
        format_stat_bar(stat.home_bar_percent, width, display),
    ]
}
