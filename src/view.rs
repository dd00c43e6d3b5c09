//! Derived display values for each match.
//!
//! Everything here is a pure function of one [`Match`] plus the configured
//! time zone, so a malformed match can only ever affect its own card.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::config::TimeZoneSetting;
use crate::error::FormatError;
use crate::model::{EventKind, Match, MatchStatus, TeamSplit};
use crate::store::MatchStore;

/// 24-hour start time format
pub const TIME_FORMAT: &str = "%H:%M";

/// Shown instead of the start time when it cannot be parsed
pub const TIME_PLACEHOLDER: &str = "--:--";

/// ISO 8601 layouts with an offset (`Z`, `+02:00` or `+0200`), tried after RFC 3339
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// ISO 8601 layouts without an offset
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

enum StartTime {
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time with no offset
    Naive(NaiveDateTime),
}

fn parse_start_time(input: &str) -> Result<StartTime, chrono::ParseError> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(input) {
        Ok(parsed) => return Ok(StartTime::Zoned(parsed)),
        Err(e) => e,
    };
    if let Some(parsed) = ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(StartTime::Zoned(parsed));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(StartTime::Naive(naive));
    }
    // A bare date is midnight UTC
    if let Some(midnight) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(StartTime::Zoned(midnight.and_utc().into()));
    }
    Err(rfc3339_err)
}

/// Format a match start time as `HH:MM` in the given zone
///
/// Accepts ISO 8601 date-times with or without seconds, fractional seconds
/// and offset. A date-time without an offset is taken to be wall-clock time
/// in `zone` already; a bare date is midnight UTC.
pub fn format_start_time(start_time: &str, zone: TimeZoneSetting) -> Result<String, FormatError> {
    let parsed = parse_start_time(start_time.trim()).map_err(|source| FormatError {
        input: start_time.to_string(),
        source,
    })?;

    let formatted = match (parsed, zone) {
        (StartTime::Naive(naive), _) => naive.format(TIME_FORMAT).to_string(),
        (StartTime::Zoned(dt), TimeZoneSetting::Local) => dt.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        (StartTime::Zoned(dt), TimeZoneSetting::Utc) => dt.with_timezone(&Utc).format(TIME_FORMAT).to_string(),
        (StartTime::Zoned(dt), TimeZoneSetting::Fixed(offset)) => dt.with_timezone(&offset).format(TIME_FORMAT).to_string(),
    };
    Ok(formatted)
}

/// Like [`format_start_time`], but falls back to [`TIME_PLACEHOLDER`]
pub fn display_start_time(start_time: &str, zone: TimeZoneSetting) -> String {
    format_start_time(start_time, zone).unwrap_or_else(|e| {
        warn!("{}: {}", e, e.source);
        TIME_PLACEHOLDER.to_string()
    })
}

/// Home possession bar width: the home value, verbatim
pub fn possession_bar_percent(possession: TeamSplit<i32>) -> f64 {
    possession.home as f64
}

/// Home shots bar width: home share of all shots, 0 when nobody has shot
pub fn shots_bar_percent(shots: TeamSplit<u32>) -> f64 {
    let total = shots.home as u64 + shots.away as u64;
    if total == 0 {
        return 0.0;
    }
    shots.home as f64 / total as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub minute: u32,
    pub kind: EventKind,
    pub description: String,
}

impl EventRow {
    /// Minute with a trailing apostrophe, e.g. `23'`
    pub fn minute_label(&self) -> String {
        format!("{}'", self.minute)
    }
}

/// One labelled home/away comparison with its bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub home_value: String,
    pub away_value: String,
    pub home_bar_percent: f64,
}

/// Everything needed to draw one match card
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub status: MatchStatus,
    pub start_time: String,
    pub events: Vec<EventRow>,
    pub possession: StatLine,
    pub shots: StatLine,
    pub analysis: String,
}

impl MatchCard {
    pub fn from_match(m: &Match, zone: TimeZoneSetting) -> Self {
        let events = m
            .events
            .iter()
            .map(|e| EventRow {
                minute: e.minute,
                kind: e.kind,
                description: e.description.clone(),
            })
            .collect();

        Self {
            id: m.id,
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            score: m.score.clone(),
            status: m.status,
            start_time: display_start_time(&m.start_time, zone),
            events,
            possession: StatLine {
                label: "Possession",
                home_value: format!("{}%", m.possession.home),
                away_value: format!("{}%", m.possession.away),
                home_bar_percent: possession_bar_percent(m.possession),
            },
            shots: StatLine {
                label: "Shots",
                home_value: m.shots.home.to_string(),
                away_value: m.shots.away.to_string(),
                home_bar_percent: shots_bar_percent(m.shots),
            },
            analysis: m.analysis.clone(),
        }
    }
}

/// Read-only view over an injected match store
pub struct MatchView {
    store: Box<dyn MatchStore>,
    time_zone: TimeZoneSetting,
}

impl MatchView {
    pub fn new(store: Box<dyn MatchStore>, time_zone: TimeZoneSetting) -> Self {
        Self { store, time_zone }
    }

    pub fn time_zone(&self) -> TimeZoneSetting {
        self.time_zone
    }

    pub fn len(&self) -> usize {
        self.store.matches().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.matches().is_empty()
    }

    /// One card per match, in store order
    pub fn cards(&self) -> Vec<MatchCard> {
        self.store
            .matches()
            .iter()
            .map(|m| MatchCard::from_match(m, self.time_zone))
            .collect()
    }
}
