use super::attribute::{AttributeFilter, is_attribute_term};
use super::mods::ModFilter;
use crate::score::{ScoreRecord, UNKNOWN_ARTIST, UNKNOWN_SONG};

/// Name searched for players without a name.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// One whitespace-delimited search token.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTerm {
    Mod(ModFilter),
    Attribute(AttributeFilter),
    /// Lower-case text matched against title, artist and player
    Text(String),
}

impl QueryTerm {
    /// Classify a token: mod filter, then attribute comparison, then free text.
    pub fn classify(token: &str) -> Self {
        if token.chars().count() >= 2
            && let Some(filter) = ModFilter::parse(token)
        {
            return Self::Mod(filter);
        }
        if is_attribute_term(token) {
            return Self::Attribute(AttributeFilter::parse(token));
        }
        Self::Text(token.to_lowercase())
    }

    pub fn matches(&self, score: &ScoreRecord) -> bool {
        match self {
            Self::Mod(filter) => filter.matches(score),
            Self::Attribute(filter) => filter.matches(score),
            Self::Text(text) => text_matches(score, text),
        }
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Scores without beatmap metadata never match text.
fn text_matches(score: &ScoreRecord, text: &str) -> bool {
    let Some(beatmap) = &score.beatmap else {
        return false;
    };

    [
        or_default(&beatmap.song_title, UNKNOWN_SONG),
        or_default(&beatmap.artist, UNKNOWN_ARTIST),
        or_default(&score.player_name, UNKNOWN_PLAYER),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(text))
}

/// A parsed search string; every term must match (AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    terms: Vec<QueryTerm>,
}

impl Query {
    /// Parse a search string. Matching is case-insensitive throughout.
    pub fn parse(search: &str) -> Self {
        let search = search.to_lowercase();
        Self {
            terms: search.split_whitespace().map(QueryTerm::classify).collect(),
        }
    }

    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, score: &ScoreRecord) -> bool {
        self.terms.iter().all(|term| term.matches(score))
    }
}
