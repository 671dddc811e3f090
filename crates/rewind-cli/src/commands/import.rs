//! Store a JSON score list as the score cache.

use std::path::Path;

use anyhow::{Context, Result};
use rewind_core::{Config, ScoreRecord, ScoreStore};

use crate::cli_utils;

pub fn run(config: &Config, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let scores: Vec<ScoreRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse scores from {}", file.display()))?;

    let mut cache = cli_utils::open_cache(config)?;
    cache.save(&scores)?;
    eprintln!(
        "Imported {} scores into {}",
        scores.len(),
        cache.path().display()
    );
    Ok(())
}
