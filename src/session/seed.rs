//! # Seed Dataset
//!
//! The template dataset every new session starts from. Loaded once at
//! startup from a static JSON file (an array of records); each new session
//! receives its own copy.

use std::fs;
use std::path::Path;

use crate::store::Record;

use super::errors::{SessionError, SessionResult};

/// Load the seed template from a JSON file
pub fn load_template(path: &Path) -> SessionResult<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| SessionError::SeedIo {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SessionError::SeedParse {
        path: path.display().to_string(),
        source,
    })
}
