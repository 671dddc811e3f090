//! Browsing state over a loaded score list.

use tracing::debug;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::query::{PlayerFilter, SortSpec, filter_scores, sort_scores};
use crate::score::ScoreRecord;

/// The loaded scores plus the current search, player filter, sort and page.
///
/// Every change to the search, players or sort recomputes the view from the
/// full source list and returns to the first page.
#[derive(Debug, Clone)]
pub struct ScoreSession {
    source: Vec<ScoreRecord>,
    view: Vec<ScoreRecord>,
    search: String,
    players: PlayerFilter,
    sort: SortSpec,
    page_size: usize,
    page: usize,
}

impl Default for ScoreSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ScoreSession {
    pub fn new(scores: Vec<ScoreRecord>) -> Self {
        Self {
            view: scores.clone(),
            source: scores,
            search: String::new(),
            players: PlayerFilter::new(),
            sort: SortSpec::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
        }
    }

    /// Set the page size; zero falls back to the default.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.page = 0;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort(sort);
        self
    }

    pub fn source(&self) -> &[ScoreRecord] {
        &self.source
    }

    /// Filtered and sorted scores, across all pages.
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.view
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn players(&self) -> &PlayerFilter {
        &self.players
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search(&mut self, search: &str) {
        self.search = search.to_string();
        self.refresh();
    }

    pub fn set_players(&mut self, players: PlayerFilter) {
        self.players = players;
        self.refresh();
    }

    pub fn reset_players(&mut self) {
        self.set_players(PlayerFilter::new());
    }

    pub fn sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.refresh();
    }

    /// Swap the source list, keeping the current search, players and sort.
    pub fn replace_scores(&mut self, scores: Vec<ScoreRecord>) {
        self.source = scores;
        self.refresh();
    }

    fn refresh(&mut self) {
        let filtered = filter_scores(&self.source, &self.search, &self.players);
        self.view = sort_scores(&filtered, self.sort);
        self.page = 0;
        debug!(
            "Session view: {} of {} scores, {} pages",
            self.view.len(),
            self.source.len(),
            self.page_count()
        );
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.view.len().div_ceil(self.page_size)
    }

    /// Scores on the current page.
    pub fn page(&self) -> &[ScoreRecord] {
        let start = (self.page * self.page_size).min(self.view.len());
        let end = (start + self.page_size).min(self.view.len());
        &self.view[start..end]
    }

    /// Advance one page; returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a one-based page number, clamped to the existing pages.
    pub fn goto_page(&mut self, page: usize) {
        let last = self.page_count().max(1);
        self.page = page.clamp(1, last) - 1;
    }

    /// Current position as `page/pages`.
    pub fn page_label(&self) -> String {
        format!("{}/{}", self.page + 1, self.page_count().max(1))
    }
}
