//! Console formatting for score records

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use super::mods::Mods;
use super::record::ScoreRecord;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_SONG: &str = "Unknown Song";
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

/// `98.76%`
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.2}%", accuracy)
}

/// `31-01-2024 18:05 UTC`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d-%m-%Y %H:%M UTC").to_string()
}

/// `+HDHR`, or `+No Mod`
pub fn format_mods(mods: Mods) -> String {
    format!("+{}", mods.display())
}

/// `812x / 812x (FC)`
pub fn format_combo(score: &ScoreRecord) -> String {
    let max = format!("{}x", score.map_max_combo);
    if score.is_full_combo() {
        format!("{}x / {} (FC)", score.max_combo, max)
    } else {
        format!("{}x / {}", score.max_combo, max)
    }
}

fn non_empty<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|s| !s.is_empty()).unwrap_or(fallback)
}

/// Multi-line, coloured description of a score.
pub fn format_score_card(score: &ScoreRecord) -> String {
    let mut output = String::new();

    let artist = non_empty(score.artist(), UNKNOWN_ARTIST);
    let title = non_empty(score.song_title(), UNKNOWN_SONG);
    let difficulty = non_empty(
        score.beatmap.as_ref().map(|b| b.difficulty.as_str()),
        UNKNOWN_DIFFICULTY,
    );

    let _ = writeln!(
        output,
        "{} - {} [{}]",
        artist,
        title.bold(),
        difficulty
    );

    if let Some(beatmap) = &score.beatmap {
        let _ = writeln!(
            output,
            "  {:.1}* {:.0}bpm  CS {:.1} HP {:.1} OD {:.1} AR {:.1}",
            score.star_rating.yellow(),
            score.bpm,
            beatmap.circle_size,
            beatmap.hp_drain,
            beatmap.overall_difficulty,
            beatmap.approach_rate,
        );
    }

    let _ = writeln!(
        output,
        "  {}  {}  {}  {}",
        score.display_player().cyan(),
        format_mods(score.mods),
        format_accuracy(score.accuracy()),
        format_combo(score),
    );
    let _ = writeln!(
        output,
        "  {}/{}/{}/{}  {}pp (FC {}pp)",
        score.hits.n300.cyan(),
        score.hits.n100.green(),
        score.hits.n50.yellow(),
        score.hits.misses.red(),
        format!("{:.2}", score.current_pp).bold(),
        format!("{:.2}", score.max_pp),
    );
    let _ = write!(
        output,
        "  {}  {}",
        format_date(&score.timestamp).dimmed(),
        score.replay_hash.dimmed()
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{BeatmapMetadata, HitStatistics};
    use chrono::TimeZone;

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(93.33333), "93.33%");
        assert_eq!(format_accuracy(0.0), "0.00%");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 18, 5, 0).unwrap();
        assert_eq!(format_date(&ts), "31-01-2024 18:05 UTC");
    }

    #[test]
    fn test_format_mods() {
        assert_eq!(format_mods(Mods::Hidden | Mods::HardRock), "+HDHR");
        assert_eq!(format_mods(Mods::empty()), "+No Mod");
    }

    #[test]
    fn test_format_combo_marks_full_combo() {
        let score = ScoreRecord {
            max_combo: 500,
            map_max_combo: 500,
            ..Default::default()
        };
        assert_eq!(format_combo(&score), "500x / 500x (FC)");
    }

    #[test]
    fn test_score_card_uses_fallbacks() {
        let score = ScoreRecord {
            hits: HitStatistics::new(10, 0, 0, 0),
            beatmap: Some(BeatmapMetadata::default()),
            ..Default::default()
        };
        let card = format_score_card(&score);
        assert!(card.contains(UNKNOWN_ARTIST));
        assert!(card.contains(UNKNOWN_SONG));
        assert!(card.contains("100.00%"));
        assert!(card.contains("Guest (Offline)"));
    }
}
