//! Match data model.
//!
//! These types mirror the match records exactly as they are loaded. Several
//! relationships between fields are deliberately left unchecked:
//! - `possession.home + possession.away` need not be 100
//! - `score` is free text and is never derived from `events`
//! - `events` keep insertion order and are not sorted by minute
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// What happened at a given minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Goal,
    Card,
    Substitution,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Goal => "GOAL",
            EventKind::Card => "CARD",
            EventKind::Substitution => "SUB",
        }
    }
}

/// Match status. Stored and displayed, never used to branch rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::Upcoming => "UPCOMING",
            MatchStatus::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchEvent {
    pub id: u32,
    pub minute: u32,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
}

/// A home/away pair of numbers (possession share, shot counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TeamSplit<T> {
    pub home: T,
    pub away: T,
}

impl<T> TeamSplit<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub status: MatchStatus,
    /// ISO 8601 timestamp, kept as text so a malformed value only affects display
    pub start_time: String,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
    #[serde(default)]
    pub analysis: String,
    pub possession: TeamSplit<i32>,
    pub shots: TeamSplit<u32>,
}

impl Match {
    /// Event ids that appear more than once, in ascending order
    pub fn duplicate_event_ids(&self) -> Vec<u32> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for event in &self.events {
            if !seen.insert(event.id) {
                duplicates.insert(event.id);
            }
        }
        duplicates.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_sample_matches;

    #[test]
    fn test_status_labels() {
        assert_eq!(MatchStatus::Live.label(), "LIVE");
        assert_eq!(MatchStatus::Upcoming.to_string(), "UPCOMING");
        assert_eq!(MatchStatus::Finished.to_string(), "FINISHED");
    }

    #[test]
    fn test_event_kind_labels() {
        assert_eq!(EventKind::Goal.label(), "GOAL");
        assert_eq!(EventKind::Card.label(), "CARD");
        assert_eq!(EventKind::Substitution.label(), "SUB");
    }

    #[test]
    fn test_sample_matches_have_unique_event_ids() {
        for m in create_sample_matches() {
            assert!(m.duplicate_event_ids().is_empty(), "match {} has duplicates", m.id);
        }
    }

    #[test]
    fn test_duplicate_event_ids_reported_once() {
        let mut m = create_sample_matches().remove(1);
        let dup = m.events[0].clone();
        m.events.push(dup.clone());
        m.events.push(dup);

        assert_eq!(m.duplicate_event_ids(), vec![1]);
        // Data is left as-is
        assert_eq!(m.events.len(), 4);
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let toml_str = r#"
id = 7
homeTeam = "Arsenal"
awayTeam = "Chelsea"
score = "0-0"
status = "upcoming"
startTime = "2023-10-29T16:30:00Z"
analysis = "Tight derby expected."
possession = { home = 70, away = 70 }
shots = { home = 0, away = 0 }

[[events]]
id = 1
minute = 90
type = "substitution"
description = "Saka off, Trossard on"
        "#;

        let m: Match = toml::from_str(toml_str).unwrap();
        assert_eq!(m.home_team, "Arsenal");
        assert_eq!(m.status, MatchStatus::Upcoming);
        assert_eq!(m.events[0].kind, EventKind::Substitution);
        // Possession is not normalized
        assert_eq!(m.possession, TeamSplit::new(70, 70));
    }

    #[test]
    fn test_events_and_analysis_default_to_empty() {
        let toml_str = r#"
id = 1
homeTeam = "A"
awayTeam = "B"
score = "0-0"
status = "finished"
startTime = "2023-10-29T16:30:00Z"
possession = { home = 50, away = 50 }
shots = { home = 1, away = 2 }
        "#;

        let m: Match = toml::from_str(toml_str).unwrap();
        assert!(m.events.is_empty());
        assert!(m.analysis.is_empty());
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let toml_str = r#"
id = 1
minute = 10
type = "penalty"
description = "?"
        "#;

        assert!(toml::from_str::<MatchEvent>(toml_str).is_err());
    }
}
