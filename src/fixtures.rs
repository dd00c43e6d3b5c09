/// Built-in match data
///
/// The dashboard ships with two live fixtures which are used when no
/// `matches_file` is configured. Tests and benchmarks use the same data.
use crate::model::{EventKind, Match, MatchEvent, MatchStatus, TeamSplit};

/// Create the built-in list of matches
pub fn create_sample_matches() -> Vec<Match> {
    vec![
        Match {
            id: 1,
            home_team: "Real Madrid".to_string(),
            away_team: "Barcelona".to_string(),
            score: "2-1".to_string(),
            status: MatchStatus::Live,
            start_time: "2023-10-28T20:00:00Z".to_string(),
            events: vec![
                create_event(1, 23, EventKind::Goal, "Goal! Vinicius Jr scores for Real Madrid!"),
                create_event(2, 35, EventKind::Card, "Yellow card shown to Gavi"),
                create_event(3, 42, EventKind::Goal, "Goal! Lewandowski equalizes for Barcelona!"),
                create_event(4, 67, EventKind::Goal, "Goal! Bellingham puts Real Madrid ahead!"),
            ],
            analysis: "Real Madrid dominating the midfield with Bellingham and Kroos controlling the tempo. \
                       Barcelona struggling to maintain possession in dangerous areas."
                .to_string(),
            possession: TeamSplit::new(55, 45),
            shots: TeamSplit::new(12, 8),
        },
        Match {
            id: 2,
            home_team: "Manchester City".to_string(),
            away_team: "Liverpool".to_string(),
            score: "1-1".to_string(),
            status: MatchStatus::Live,
            start_time: "2023-10-28T20:00:00Z".to_string(),
            events: vec![
                create_event(1, 15, EventKind::Goal, "Goal! Haaland strikes for City!"),
                create_event(2, 45, EventKind::Goal, "Goal! Salah equalizes for Liverpool!"),
            ],
            analysis: "High-intensity match with both teams pressing aggressively. \
                       City controlling possession but Liverpool dangerous on the counter."
                .to_string(),
            possession: TeamSplit::new(62, 38),
            shots: TeamSplit::new(15, 7),
        },
    ]
}

/// Helper to create an event
pub fn create_event(id: u32, minute: u32, kind: EventKind, description: &str) -> MatchEvent {
    MatchEvent {
        id,
        minute,
        kind,
        description: description.to_string(),
    }
}
