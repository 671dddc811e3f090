//! Locate the replay file of a play.

use std::path::Path;

use anyhow::{Context, Result};
use rewind_core::{Config, ReplayLocator};

use crate::cli_utils;

/// What to hand to the system opener once the replay is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    None,
    /// The replay file itself; osu! plays it back
    Replay,
    /// The folder containing the replay
    Folder,
}

impl OpenTarget {
    pub fn from_flags(open: bool, reveal: bool) -> Self {
        if open {
            Self::Replay
        } else if reveal {
            Self::Folder
        } else {
            Self::None
        }
    }

    /// Path to open for a located `replay`, if any.
    pub fn resolve<'a>(&self, replay: &'a Path, replay_dir: &'a Path) -> Option<&'a Path> {
        match self {
            Self::None => None,
            Self::Replay => Some(replay),
            Self::Folder => Some(replay.parent().unwrap_or(replay_dir)),
        }
    }
}

pub fn run(
    osu_path: Option<&Path>,
    config: &Config,
    beatmap: &str,
    replay: &str,
    target: OpenTarget,
) -> Result<()> {
    let installation = cli_utils::resolve_installation(osu_path, config)?;
    let locator = ReplayLocator::new(installation.replay_dir());

    let path = locator.locate(beatmap, replay)?;
    println!("{}", path.display());

    if let Some(to_open) = target.resolve(&path, locator.replay_dir()) {
        open::that(to_open).with_context(|| format!("Failed to open {}", to_open.display()))?;
    }
    Ok(())
}
