//! Builds `ScoreRecord`s from the external score and beatmap databases.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::performance::{PerformanceAttributes, PerformanceModel};
use crate::score::{BeatmapMetadata, HitStatistics, Mods, ScoreRecord};

/// Game mode of standard osu! plays.
pub const STANDARD_MODE: u8 = 0;

/// A score as stored in the score database, before performance is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScore {
    pub beatmap_hash: String,
    pub mode: u8,
    pub player_name: String,
    pub timestamp: DateTime<Utc>,
    pub mods: Mods,
    pub hits: HitStatistics,
    pub max_combo: u32,
    pub replay_hash: String,
}

/// Score and beatmap database access.
pub trait ScoreSource {
    fn scores(&self) -> Result<Vec<RawScore>>;
    fn beatmaps(&self) -> Result<Vec<BeatmapMetadata>>;
}

/// Joins raw scores with their beatmaps and attaches performance values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreLoader;

impl ScoreLoader {
    /// Load every standard-mode score.
    ///
    /// Scores on beatmaps unknown to the beatmap database are kept without
    /// beatmap metadata or performance values. A failed calculation keeps the
    /// score with zeroed performance values.
    pub fn load<S, M>(source: &S, model: &M) -> Result<Vec<ScoreRecord>>
    where
        S: ScoreSource + ?Sized,
        M: PerformanceModel + ?Sized,
    {
        let beatmaps: HashMap<String, BeatmapMetadata> = source
            .beatmaps()?
            .into_iter()
            .map(|beatmap| (beatmap.beatmap_hash.clone(), beatmap))
            .collect();
        let raw_scores = source.scores()?;
        let total = raw_scores.len();

        let mut records = Vec::with_capacity(total);
        let mut skipped = 0usize;
        for raw in raw_scores {
            let Some(beatmap) = beatmaps.get(&raw.beatmap_hash) else {
                debug!("Beatmap {} not in database", raw.beatmap_hash);
                records.push(Self::build(raw, None, PerformanceAttributes::default()));
                continue;
            };
            if raw.mode != STANDARD_MODE {
                skipped += 1;
                continue;
            }

            let attributes = model
                .evaluate(beatmap, &raw.hits, raw.max_combo, raw.mods)
                .unwrap_or_else(|e| {
                    warn!(
                        "Performance calculation failed for {} on {}: {}",
                        raw.replay_hash, raw.beatmap_hash, e
                    );
                    PerformanceAttributes::default()
                });
            records.push(Self::build(raw, Some(beatmap), attributes));
        }

        info!(
            "Loaded {} of {} scores ({} non-standard skipped)",
            records.len(),
            total,
            skipped
        );
        Ok(records)
    }

    fn build(
        raw: RawScore,
        beatmap: Option<&BeatmapMetadata>,
        attributes: PerformanceAttributes,
    ) -> ScoreRecord {
        // Difficulty settings are reported with the mods applied.
        let beatmap = beatmap.map(|beatmap| BeatmapMetadata {
            approach_rate: attributes.approach_rate,
            hp_drain: attributes.hp_drain,
            overall_difficulty: attributes.overall_difficulty,
            ..beatmap.clone()
        });

        ScoreRecord {
            player_name: raw.player_name,
            timestamp: raw.timestamp,
            mods: raw.mods,
            hits: raw.hits,
            max_combo: raw.max_combo,
            map_max_combo: attributes.max_combo,
            current_pp: attributes.current_pp,
            max_pp: attributes.max_pp,
            star_rating: attributes.star_rating,
            bpm: attributes.bpm,
            replay_hash: raw.replay_hash,
            beatmap,
        }
    }
}
