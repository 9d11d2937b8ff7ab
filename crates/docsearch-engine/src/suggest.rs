//! Prefix suggestions merged from history and corpus terms.
//!
//! Sources are consulted in priority order (history, keywords, phrases,
//! tags), each with its own cap; duplicates keep the first, higher-priority
//! occurrence.

use std::collections::HashSet;

use docsearch_core::types::Suggestion;

use crate::derived::DerivedTerms;
use crate::history::SearchHistory;

pub const MIN_PREFIX_CHARS: usize = 2;
const HISTORY_CAP: usize = 3;
const KEYWORD_CAP: usize = 3;
const PHRASE_CAP: usize = 2;
const TAG_CAP: usize = 2;

fn containing<'a>(items: &'a [String], needle: &'a str, cap: usize) -> impl Iterator<Item = &'a String> + 'a {
    items.iter().filter(move |item| item.contains(needle)).take(cap)
}

/// Case-insensitive substring matches for `prefix`, at most `limit`.
pub fn suggest(prefix: &str, history: &SearchHistory, terms: &DerivedTerms, limit: usize) -> Vec<Suggestion> {
    if prefix.chars().count() < MIN_PREFIX_CHARS {
        return Vec::new();
    }
    let needle = prefix.to_lowercase();

    let candidates = history
        .matching(&needle)
        .into_iter()
        .take(HISTORY_CAP)
        .map(Suggestion::history)
        .chain(containing(&terms.keywords, &needle, KEYWORD_CAP).map(Suggestion::keyword))
        .chain(containing(&terms.phrases, &needle, PHRASE_CAP).map(Suggestion::phrase))
        .chain(containing(&terms.tags, &needle, TAG_CAP).map(Suggestion::tag));

    let mut seen: HashSet<String> = HashSet::new();
    let suggestions: Vec<Suggestion> = candidates.filter(|s| seen.insert(s.text.clone())).take(limit).collect();
    tracing::debug!(prefix, count = suggestions.len(), "suggestions");
    suggestions
}
