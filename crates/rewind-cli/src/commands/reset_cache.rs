//! Delete the score cache.

use anyhow::Result;
use rewind_core::{Config, ScoreStore};

use crate::cli_utils;

pub fn run(config: &Config) -> Result<()> {
    let mut cache = cli_utils::open_cache(config)?;
    cache.clear()?;
    eprintln!("Score cache cleared.");
    Ok(())
}
