use std::collections::BTreeSet;

use tracing::debug;

use super::term::Query;
use crate::score::{GUEST_PLAYER, ScoreRecord};

/// Explicit set of players to keep. An empty set keeps everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    players: BTreeSet<String>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: impl Into<String>) {
        self.players.insert(player.into());
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    /// Whether `score` passes the filter. Blank player names match the guest entry.
    pub fn allows(&self, score: &ScoreRecord) -> bool {
        if self.players.is_empty() || self.players.contains(&score.player_name) {
            return true;
        }
        score.is_guest() && self.players.contains(GUEST_PLAYER)
    }
}

impl<S: Into<String>> FromIterator<S> for PlayerFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Apply a search string and a player filter to `scores`, keeping their order.
pub fn filter_scores(
    scores: &[ScoreRecord],
    search: &str,
    players: &PlayerFilter,
) -> Vec<ScoreRecord> {
    let query = Query::parse(search);

    let filtered: Vec<ScoreRecord> = scores
        .iter()
        .filter(|score| query.matches(score) && players.allows(score))
        .cloned()
        .collect();

    debug!(
        "Filtered {} of {} scores ({} terms, {} players)",
        filtered.len(),
        scores.len(),
        query.terms().len(),
        players.players.len()
    );
    filtered
}

/// Sorted unique player names; blank names appear as the guest entry.
pub fn list_players(scores: &[ScoreRecord]) -> Vec<String> {
    scores
        .iter()
        .map(|score| {
            if score.is_guest() {
                GUEST_PLAYER.to_string()
            } else {
                score.player_name.trim().to_string()
            }
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str) -> ScoreRecord {
        ScoreRecord {
            player_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_allows_everyone() {
        let filter = PlayerFilter::new();
        assert!(filter.allows(&player("A")));
        assert!(filter.allows(&player("")));
    }

    #[test]
    fn test_filter_by_name() {
        let filter: PlayerFilter = ["A"].into_iter().collect();
        assert!(filter.allows(&player("A")));
        assert!(!filter.allows(&player("B")));
        assert!(!filter.allows(&player("")));
    }

    #[test]
    fn test_guest_entry_matches_blank_names() {
        let filter: PlayerFilter = [GUEST_PLAYER].into_iter().collect();
        assert!(filter.allows(&player("")));
        assert!(filter.allows(&player("  ")));
        assert!(!filter.allows(&player("A")));
    }

    #[test]
    fn test_filter_scores_keeps_order_and_input() {
        let scores = vec![player("A"), player("B"), player("A")];
        let filter: PlayerFilter = ["A"].into_iter().collect();

        let filtered = filter_scores(&scores, "", &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.player_name == "A"));
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn test_list_players() {
        let scores = vec![player("b"), player(""), player("a"), player("b"), player(" ")];
        assert_eq!(list_players(&scores), vec!["Guest (Offline)", "a", "b"]);
    }
}
