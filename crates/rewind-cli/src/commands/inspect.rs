//! Decode and print a replay header.

use std::path::Path;

use anyhow::{Context, Result};
use rewind_core::ReplayHeader;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let header = ReplayHeader::parse(&bytes)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&header)?);
        return Ok(());
    }

    let field = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();
    println!("Mode:         {}", header.mode);
    println!("Game version: {}", header.game_version);
    println!("Beatmap hash: {}", field(&header.beatmap_hash));
    println!("Player:       {}", field(&header.player_name));
    println!("Replay hash:  {}", field(&header.replay_hash));
    Ok(())
}
