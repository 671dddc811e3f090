//! Common CLI utility functions shared across commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use rewind_core::{Config, Installation, JsonScoreCache, ScoreRecord, ScoreStore};
use tracing::debug;

const APP_DIR: &str = "rewind";
const CONFIG_FILE: &str = "config.toml";
const CACHE_FILE: &str = "scores.json";

/// Config file path: `--config` or the per-user config directory.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let dir = dirs::config_dir().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
    Ok(dir.join(APP_DIR).join(CONFIG_FILE))
}

pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Open the installation from `--osu-path`, falling back to the configured folder.
pub fn resolve_installation(osu_path: Option<&Path>, config: &Config) -> Result<Installation> {
    let Some(root) = osu_path.or(config.osu_path.as_deref()) else {
        bail!("No osu! folder configured. Run `rewind set-folder <PATH>` or pass --osu-path.");
    };
    Ok(Installation::open(root)?)
}

/// Score cache: the configured file or the per-user cache directory.
pub fn open_cache(config: &Config) -> Result<JsonScoreCache> {
    let path = match &config.cache_file {
        Some(path) => path.clone(),
        None => dirs::cache_dir()
            .ok_or_else(|| anyhow!("Cannot determine cache directory"))?
            .join(APP_DIR)
            .join(CACHE_FILE),
    };
    debug!("Using score cache {}", path.display());
    Ok(JsonScoreCache::new(path))
}

/// Load cached scores, failing when nothing was imported yet.
pub fn load_scores(cache: &JsonScoreCache) -> Result<Vec<ScoreRecord>> {
    match cache.load()? {
        Some(scores) => Ok(scores),
        None => bail!(
            "No cached scores at {}. Run `rewind import <FILE>` first.",
            cache.path().display()
        ),
    }
}
