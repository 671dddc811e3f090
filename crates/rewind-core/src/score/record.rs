use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mods::Mods;

/// Placeholder shown for players with a blank name.
pub const GUEST_PLAYER: &str = "Guest (Offline)";

/// Metadata of the beatmap a score was set on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatmapMetadata {
    pub artist: String,
    pub song_title: String,
    pub creator_name: String,
    /// Difficulty (version) name
    pub difficulty: String,
    /// MD5 of the .osu file; replay files are named after it
    pub beatmap_hash: String,
    pub circle_size: f64,
    pub hp_drain: f64,
    pub approach_rate: f64,
    pub overall_difficulty: f64,
}

/// Judgement counts of a play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitStatistics {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
}

impl HitStatistics {
    pub fn new(n300: u32, n100: u32, n50: u32, misses: u32) -> Self {
        Self {
            n300,
            n100,
            n50,
            misses,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.n300) + u64::from(self.n100) + u64::from(self.n50) + u64::from(self.misses)
    }

    /// Accuracy in percent (0-100); 0 when nothing was hit.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted = 300.0 * f64::from(self.n300)
            + 100.0 * f64::from(self.n100)
            + 50.0 * f64::from(self.n50);
        weighted / (300.0 * total as f64) * 100.0
    }
}

/// One played attempt, with the derived performance values attached at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRecord {
    /// Empty for offline/guest plays
    pub player_name: String,
    pub timestamp: DateTime<Utc>,
    pub mods: Mods,
    pub hits: HitStatistics,
    pub max_combo: u32,
    pub map_max_combo: u32,
    pub current_pp: f64,
    pub max_pp: f64,
    pub star_rating: f64,
    pub bpm: f64,
    pub replay_hash: String,
    /// `None` when the beatmap is missing from the beatmap database
    pub beatmap: Option<BeatmapMetadata>,
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            mods: Mods::empty(),
            hits: HitStatistics::default(),
            max_combo: 0,
            map_max_combo: 0,
            current_pp: 0.0,
            max_pp: 0.0,
            star_rating: 0.0,
            bpm: 0.0,
            replay_hash: String::new(),
            beatmap: None,
        }
    }
}

impl ScoreRecord {
    pub fn accuracy(&self) -> f64 {
        self.hits.accuracy()
    }

    pub fn is_full_combo(&self) -> bool {
        self.max_combo == self.map_max_combo
    }

    pub fn is_guest(&self) -> bool {
        self.player_name.trim().is_empty()
    }

    /// Player name, with blank names shown as the guest placeholder.
    pub fn display_player(&self) -> &str {
        if self.is_guest() {
            GUEST_PLAYER
        } else {
            &self.player_name
        }
    }

    pub fn beatmap_hash(&self) -> Option<&str> {
        self.beatmap.as_ref().map(|b| b.beatmap_hash.as_str())
    }

    pub fn song_title(&self) -> Option<&str> {
        self.beatmap.as_ref().map(|b| b.song_title.as_str())
    }

    pub fn artist(&self) -> Option<&str> {
        self.beatmap.as_ref().map(|b| b.artist.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_formula() {
        let hits = HitStatistics::new(90, 10, 0, 0);
        let expected = (300.0 * 90.0 + 100.0 * 10.0) / (300.0 * 100.0) * 100.0;
        assert!((hits.accuracy() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_all_300s() {
        assert_eq!(HitStatistics::new(500, 0, 0, 0).accuracy(), 100.0);
    }

    #[test]
    fn test_accuracy_misses_only() {
        assert_eq!(HitStatistics::new(0, 0, 0, 7).accuracy(), 0.0);
    }

    #[test]
    fn test_accuracy_empty() {
        assert_eq!(HitStatistics::default().accuracy(), 0.0);
    }

    #[test]
    fn test_full_combo() {
        let score = ScoreRecord {
            max_combo: 812,
            map_max_combo: 812,
            ..Default::default()
        };
        assert!(score.is_full_combo());

        let score = ScoreRecord {
            max_combo: 811,
            ..score
        };
        assert!(!score.is_full_combo());
    }

    #[test]
    fn test_display_player_guest() {
        let score = ScoreRecord {
            player_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(score.is_guest());
        assert_eq!(score.display_player(), GUEST_PLAYER);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let score: ScoreRecord =
            serde_json::from_str(r#"{"player_name":"A","current_pp":100.5,"mods":24}"#).unwrap();
        assert_eq!(score.player_name, "A");
        assert_eq!(score.current_pp, 100.5);
        assert_eq!(score.mods, Mods::Hidden | Mods::HardRock);
        assert!(score.beatmap.is_none());
        assert_eq!(score.timestamp, DateTime::<Utc>::UNIX_EPOCH);
    }
}
