use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use crate::score::ScoreRecord;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SortKey {
    /// Keep the loaded order
    #[default]
    #[strum(serialize = "default")]
    #[serde(rename = "default")]
    Default,
    #[strum(serialize = "title")]
    #[serde(rename = "title")]
    Title,
    #[strum(serialize = "artist")]
    #[serde(rename = "artist")]
    Artist,
    #[strum(serialize = "user")]
    #[serde(rename = "user")]
    User,
    #[strum(serialize = "date")]
    #[serde(rename = "date")]
    Date,
    #[strum(serialize = "pp")]
    #[serde(rename = "pp")]
    Pp,
    #[strum(serialize = "maxPP")]
    #[serde(rename = "maxPP")]
    MaxPp,
    #[strum(serialize = "combo")]
    #[serde(rename = "combo")]
    Combo,
    #[strum(to_string = "acc", serialize = "accuracy")]
    #[serde(rename = "acc", alias = "accuracy")]
    Accuracy,
    #[strum(to_string = "sr", serialize = "starRating")]
    #[serde(rename = "sr", alias = "starRating")]
    StarRating,
    #[strum(serialize = "bpm")]
    #[serde(rename = "bpm")]
    Bpm,
    #[strum(serialize = "cs")]
    #[serde(rename = "cs")]
    CircleSize,
    #[strum(serialize = "hp")]
    #[serde(rename = "hp")]
    HpDrain,
    #[strum(serialize = "ar")]
    #[serde(rename = "ar")]
    ApproachRate,
    #[strum(serialize = "od")]
    #[serde(rename = "od")]
    OverallDifficulty,
}

impl SortKey {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Names of every key, in declaration order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        Self::iter().map(|key| key.name())
    }

    /// Comparator for this key; `None` keeps the input order.
    fn comparator(&self) -> Option<fn(&ScoreRecord, &ScoreRecord) -> Ordering> {
        let cmp: fn(&ScoreRecord, &ScoreRecord) -> Ordering = match self {
            Self::Default => return None,
            Self::Title => |a, b| compare_optional_text(a.song_title(), b.song_title()),
            Self::Artist => |a, b| compare_optional_text(a.artist(), b.artist()),
            Self::User => |a, b| locale_compare(&a.player_name, &b.player_name),
            Self::Date => |a, b| a.timestamp.cmp(&b.timestamp),
            Self::Pp => |a, b| compare_numbers(a.current_pp, b.current_pp),
            Self::MaxPp => |a, b| compare_numbers(a.max_pp, b.max_pp),
            Self::Combo => |a, b| a.max_combo.cmp(&b.max_combo),
            Self::Accuracy => |a, b| compare_numbers(a.accuracy(), b.accuracy()),
            Self::StarRating => |a, b| compare_numbers(a.star_rating, b.star_rating),
            Self::Bpm => |a, b| compare_numbers(a.bpm, b.bpm),
            Self::CircleSize => |a, b| compare_beatmap(a, b, |m| m.circle_size),
            Self::HpDrain => |a, b| compare_beatmap(a, b, |m| m.hp_drain),
            Self::ApproachRate => |a, b| compare_beatmap(a, b, |m| m.approach_rate),
            Self::OverallDifficulty => |a, b| compare_beatmap(a, b, |m| m.overall_difficulty),
        };
        Some(cmp)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "asc")]
    #[serde(alias = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

/// Sort a copy of `scores`.
///
/// The sort is a stable ascending sort; descending order reverses that result,
/// so ties come out in reverse input order.
pub fn sort_scores(scores: &[ScoreRecord], spec: SortSpec) -> Vec<ScoreRecord> {
    let mut sorted = match spec.key.comparator() {
        Some(cmp) => merge_sort_by(scores.to_vec(), &cmp),
        None => scores.to_vec(),
    };
    if spec.order == SortOrder::Descending {
        sorted.reverse();
    }

    debug!(
        "Sorted {} scores by {} ({})",
        sorted.len(),
        spec.key,
        spec.order.name()
    );
    sorted
}

/// Stable merge sort that tolerates comparators which are not total orders.
fn merge_sort_by<T, F>(items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Equal elements keep the left one first
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Case-insensitive comparison, lower case first on ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.to_lowercase();
    let folded_b = b.to_lowercase();
    folded_a.cmp(&folded_b).then_with(|| b.cmp(a))
}

/// Missing text ranks equal to anything.
fn compare_optional_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Missing beatmaps count as zero.
fn compare_beatmap<F>(a: &ScoreRecord, b: &ScoreRecord, field: F) -> Ordering
where
    F: Fn(&crate::score::BeatmapMetadata) -> f64,
{
    let a = a.beatmap.as_ref().map(&field).unwrap_or(0.0);
    let b = b.beatmap.as_ref().map(&field).unwrap_or(0.0);
    compare_numbers(a, b)
}
