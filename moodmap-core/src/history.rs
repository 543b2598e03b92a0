//! Bounded, most-recent-first search history.

use crate::SearchQuery;

/// Maximum number of queries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Past searches, newest first. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<SearchQuery>,
}

impl SearchHistory {
    /// An empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a history from stored entries, keeping the newest
    /// [`HISTORY_CAPACITY`].
    #[must_use]
    pub fn from_entries(mut entries: Vec<SearchQuery>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Record `query` as the most recent search, evicting the oldest entry
    /// beyond capacity.
    pub fn push(&mut self, query: SearchQuery) {
        self.entries.insert(0, query);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Remove the entry at `index` (0 is newest). Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<SearchQuery> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index`, 0 being the newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SearchQuery> {
        self.entries.get(index)
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[SearchQuery] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
