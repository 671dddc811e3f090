//! Validate and save the osu! installation folder.

use std::path::Path;

use anyhow::{Context, Result};
use rewind_core::{Config, Installation};

pub fn run(config_path: &Path, mut config: Config, path: &Path) -> Result<()> {
    let installation = Installation::open(path)?;
    let root = installation
        .root()
        .canonicalize()
        .unwrap_or_else(|_| installation.root().to_path_buf());

    config.osu_path = Some(root.clone());
    config
        .save(config_path)
        .with_context(|| format!("Failed to save config {}", config_path.display()))?;

    eprintln!("osu! folder set to: {}", root.display());
    Ok(())
}
