pub mod matches;

use anyhow::Result;
use std::path::Path;

use crate::store::StaticMatchStore;

/// Load matches from `path`, or the built-in list when no file is given
pub fn load_store(path: Option<&Path>) -> Result<StaticMatchStore> {
    match path {
        Some(path) => StaticMatchStore::from_file(path),
        None => Ok(StaticMatchStore::sample()),
    }
}
