//! Bounded, most-recent-first search history.

use chrono::{DateTime, Utc};

use docsearch_core::types::SearchHistoryEntry;

#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<SearchHistoryEntry>,
    cap: usize,
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

impl SearchHistory {
    pub fn new(cap: usize) -> Self {
        Self { entries: Vec::new(), cap }
    }

    /// Rebuilds a history from stored entries. Queries are normalized; blank
    /// queries, repeats of an earlier query and entries past the cap are
    /// dropped. Returns the history and the number of dropped entries.
    pub fn from_entries(entries: Vec<SearchHistoryEntry>, cap: usize) -> (Self, usize) {
        let total = entries.len();
        let mut history = Self::new(cap);
        for mut entry in entries {
            if history.entries.len() >= cap {
                break;
            }
            entry.query = normalize(&entry.query);
            if entry.query.is_empty() || history.position(&entry.query).is_some() {
                continue;
            }
            history.entries.push(entry);
        }
        let dropped = total - history.entries.len();
        (history, dropped)
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.query == normalized)
    }

    /// Upserts `query` at time `at`. A known query is counted again and keeps
    /// its place; a new one goes to the front and the oldest entry beyond the
    /// cap is evicted. Blank queries are ignored.
    pub fn record_at(&mut self, query: &str, at: DateTime<Utc>) -> Option<&SearchHistoryEntry> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }
        let slot = match self.position(&normalized) {
            Some(slot) => {
                let entry = &mut self.entries[slot];
                entry.count += 1;
                entry.last_searched = at;
                slot
            }
            None => {
                self.entries.insert(0, SearchHistoryEntry { query: normalized, count: 1, last_searched: at });
                self.entries.truncate(self.cap);
                0
            }
        };
        self.entries.get(slot)
    }

    /// Entries whose query contains `needle`, most frequent first. Equal
    /// counts keep their history order.
    pub fn matching(&self, needle: &str) -> Vec<&SearchHistoryEntry> {
        let mut found: Vec<&SearchHistoryEntry> = self.entries.iter().filter(|e| e.query.contains(needle)).collect();
        found.sort_by(|a, b| b.count.cmp(&a.count));
        found
    }

    pub fn entries(&self) -> &[SearchHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}
