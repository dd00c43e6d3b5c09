/// Match sources, abstracting over the built-in fixtures and user-provided files
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::fixtures::create_sample_matches;
use crate::model::Match;

/// Trait for anything that can hand the view an ordered list of matches
pub trait MatchStore {
    /// All matches, in load order. Empty when nothing was loaded.
    fn matches(&self) -> &[Match];
}

/// Read-only, in-memory list of matches fixed at construction
#[derive(Debug, Clone, Default)]
pub struct StaticMatchStore {
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct MatchFile {
    #[serde(default)]
    matches: Vec<Match>,
}

impl StaticMatchStore {
    pub fn new(matches: Vec<Match>) -> Self {
        for m in &matches {
            let duplicates = m.duplicate_event_ids();
            if !duplicates.is_empty() {
                warn!("Match {} has duplicate event ids: {:?}", m.id, duplicates);
            }
        }
        debug!("Match store loaded with {} matches", matches.len());
        Self { matches }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Store holding the built-in matches
    pub fn sample() -> Self {
        Self::new(create_sample_matches())
    }

    /// Parse a TOML document made of `[[matches]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: MatchFile = toml::from_str(content).context("Failed to parse match list")?;
        Ok(Self::new(file.matches))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read match file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid match file {}", path.display()))
    }
}

impl MatchStore for StaticMatchStore {
    fn matches(&self) -> &[Match] {
        &self.matches
    }
}
