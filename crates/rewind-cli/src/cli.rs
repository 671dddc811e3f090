//! CLI argument definitions for rewind.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rewind_core::SortKey;

#[derive(Parser)]
#[command(name = "rewind")]
#[command(about = "osu! replay finder and score browser", version)]
pub struct Args {
    /// Config file (default: rewind/config.toml in the user config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// osu! installation folder (overrides the configured folder)
    #[arg(long, value_name = "DIR", env = "REWIND_OSU_PATH", global = true)]
    pub osu_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the replay file of a play
    Locate {
        /// MD5 hash of the beatmap
        #[arg(long)]
        beatmap: String,
        /// MD5 hash of the replay
        #[arg(long)]
        replay: String,
        /// Open the replay with its default application (plays it back in osu!)
        #[arg(long, conflicts_with = "reveal")]
        open: bool,
        /// Open the folder containing the replay
        #[arg(long)]
        reveal: bool,
    },
    /// Copy the replay file of a play into the export folder
    Export {
        /// MD5 hash of the beatmap
        #[arg(long)]
        beatmap: String,
        /// MD5 hash of the replay
        #[arg(long)]
        replay: String,
        /// Destination file (default: Replays/<player> - <title>[<difficulty>](<date>).osr)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode the header of a replay file
    Inspect {
        /// Replay file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search cached scores
    Search {
        /// Search terms, e.g. "+hdhr pp>200 freedom"
        query: Option<String>,
        /// Sort key
        #[arg(long, value_name = "KEY", value_parser = parse_sort_key)]
        sort: Option<SortKey>,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Only show scores of this player (repeatable)
        #[arg(long = "user", value_name = "NAME")]
        users: Vec<String>,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List players found in cached scores
    Users,
    /// Store a JSON score list as the score cache
    Import {
        /// JSON file with an array of scores
        file: PathBuf,
    },
    /// Delete the score cache
    ResetCache,
    /// Validate and save the osu! installation folder
    SetFolder {
        /// osu! installation folder
        path: PathBuf,
    },
}

/// Parse a sort key, listing the valid keys on failure.
pub fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    value.parse().map_err(|_| {
        format!(
            "unknown sort key '{}' (expected one of: {})",
            value,
            SortKey::keys().collect::<Vec<_>>().join(", ")
        )
    })
}
