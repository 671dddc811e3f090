//! Performance model port.
//!
//! Performance points and difficulty attributes come from an external
//! calculator. It is injected through `PerformanceModel` so loading scores
//! never depends on which calculator is available at runtime.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::score::{BeatmapMetadata, HitStatistics, Mods};

/// Values computed for one play on one beatmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAttributes {
    /// pp of the play as set
    pub current_pp: f64,
    /// pp of a perfect play with the same mods
    pub max_pp: f64,
    pub star_rating: f64,
    pub bpm: f64,
    /// Maximum combo of the beatmap under the given mods
    pub max_combo: u32,
    /// Mod-adjusted difficulty settings
    pub approach_rate: f64,
    pub hp_drain: f64,
    pub overall_difficulty: f64,
}

/// External performance calculator.
pub trait PerformanceModel {
    fn evaluate(
        &self,
        beatmap: &BeatmapMetadata,
        hits: &HitStatistics,
        max_combo: u32,
        mods: Mods,
    ) -> Result<PerformanceAttributes>;
}
