//! List players found in cached scores.

use anyhow::Result;
use rewind_core::{Config, list_players};

use crate::cli_utils;

pub fn run(config: &Config) -> Result<()> {
    let cache = cli_utils::open_cache(config)?;
    let scores = cli_utils::load_scores(&cache)?;

    for player in list_players(&scores) {
        println!("{}", player);
    }
    Ok(())
}
