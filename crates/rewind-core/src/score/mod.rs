//! Score records and their presentation.
//!
//! This module contains:
//! - `ScoreRecord`, `BeatmapMetadata`, `HitStatistics` - one played attempt
//! - `Mods` - the legacy modifier bitset and its name table
//! - console formatting helpers

mod display;
mod mods;
mod record;

pub use display::*;
pub use mods::*;
pub use record::*;
