use crate::score::ScoreRecord;

/// Maximum characters kept from the title and difficulty name.
pub const NAME_PART_MAX_LEN: usize = 40;

/// Replace characters that are invalid in file names with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c => c,
        })
        .collect()
}

fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// File name for an exported replay:
/// `player - title[difficulty](DD/MM/YYYY).osr`, sanitised.
pub fn replay_file_name(score: &ScoreRecord) -> String {
    let (title, difficulty) = score
        .beatmap
        .as_ref()
        .map(|b| (b.song_title.as_str(), b.difficulty.as_str()))
        .unwrap_or(("", ""));

    let name = format!(
        "{} - {}[{}]({}).osr",
        score.player_name,
        truncate_chars(title, NAME_PART_MAX_LEN),
        truncate_chars(difficulty, NAME_PART_MAX_LEN),
        score.timestamp.format("%d/%m/%Y"),
    );
    sanitize_filename(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::BeatmapMetadata;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("plain name.osr"), "plain name.osr");
    }

    #[test]
    fn test_replay_file_name() {
        let score = ScoreRecord {
            player_name: "cookiezi".to_string(),
            timestamp: Utc.with_ymd_and_hms(2013, 9, 4, 12, 0, 0).unwrap(),
            beatmap: Some(BeatmapMetadata {
                song_title: "FREEDOM DiVE".to_string(),
                difficulty: "FOUR DIMENSIONS".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            replay_file_name(&score),
            "cookiezi - FREEDOM DiVE[FOUR DIMENSIONS](04_09_2013).osr"
        );
    }

    #[test]
    fn test_replay_file_name_truncates_long_parts() {
        let title = "t".repeat(60);
        let score = ScoreRecord {
            player_name: "p".to_string(),
            beatmap: Some(BeatmapMetadata {
                song_title: title,
                difficulty: "d".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let name = replay_file_name(&score);
        assert!(name.starts_with(&format!("p - {}[d]", "t".repeat(40))));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("ひとりぼっち", 3), "ひとり");
        assert_eq!(truncate_chars("ab", 3), "ab");
    }
}
