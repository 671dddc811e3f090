//! Export the replay file of a play.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rewind_core::replay::REPLAY_EXTENSION;
use rewind_core::{Config, Installation, ReplayLocator, ScoreStore, replay_file_name};
use tracing::debug;

use crate::cli_utils;

pub fn run(
    osu_path: Option<&Path>,
    config: &Config,
    beatmap: &str,
    replay: &str,
    output: Option<&Path>,
) -> Result<()> {
    let installation = cli_utils::resolve_installation(osu_path, config)?;
    let destination = match output {
        Some(path) => path.to_path_buf(),
        None => default_destination(&installation, config, replay)?,
    };

    let locator = ReplayLocator::new(installation.replay_dir());
    let written = locator.export(beatmap, replay, &destination)?;
    eprintln!("Exported replay to: {}", written.display());
    Ok(())
}

/// Name the export after the cached score, or the replay hash when it is not cached.
fn default_destination(
    installation: &Installation,
    config: &Config,
    replay: &str,
) -> Result<PathBuf> {
    let cache = cli_utils::open_cache(config)?;
    let score = cache
        .load()?
        .and_then(|scores| scores.into_iter().find(|s| s.replay_hash == replay));

    let file_name = match score {
        Some(score) => replay_file_name(&score),
        None => {
            debug!("Replay {} not in score cache", replay);
            format!("{}{}", replay, REPLAY_EXTENSION)
        }
    };
    Ok(installation.export_dir().join(file_name))
}
