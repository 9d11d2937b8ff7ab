//! Field-weighted relevance scoring and per-document highlights.
//!
//! ```text
//! score = (title*3 + content + tags*2 + phrases*2*3) / ((terms + phrases) * 6)
//! ```
//!
//! Every term and phrase contributes at most 6 weighted points, so the score
//! lies in `[0, 1]`.

use docsearch_core::config::MarkupSettings;
use docsearch_core::types::{Document, ScoredResult};

use crate::highlight::{sentences, Highlighter, MatchStyle};
use crate::query::ParsedQuery;

pub const TITLE_WEIGHT: f64 = 3.0;
pub const CONTENT_WEIGHT: f64 = 1.0;
pub const TAG_WEIGHT: f64 = 2.0;
pub const PHRASE_WEIGHT: f64 = 3.0;
pub const PHRASE_MULTIPLIER: f64 = 2.0;
pub const UNIT_NORMALIZER: f64 = 6.0;

/// Terms shorter than this still score but are not marked.
const MIN_MARKED_TERM_CHARS: usize = 3;

/// Raw per-field match counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub title: usize,
    pub content: usize,
    pub tags: usize,
    /// Phrases found in the title or the content, before the multiplier.
    pub phrases: usize,
}

impl MatchCounts {
    pub fn weighted(&self) -> f64 {
        self.title as f64 * TITLE_WEIGHT
            + self.content as f64 * CONTENT_WEIGHT
            + self.tags as f64 * TAG_WEIGHT
            + self.phrases as f64 * PHRASE_MULTIPLIER * PHRASE_WEIGHT
    }
}

/// Scores documents against one parsed query.
///
/// Built once per query so the highlight patterns are compiled once.
#[derive(Debug, Clone)]
pub struct Scorer {
    query: ParsedQuery,
    phrases_lower: Vec<String>,
    highlighter: Highlighter,
    highlight_limit: usize,
}

impl Scorer {
    pub fn new(query: ParsedQuery, markup: &MarkupSettings, highlight_limit: usize) -> Self {
        let mut highlighter = Highlighter::new(markup.clone());
        for phrase in &query.phrases {
            highlighter = highlighter.phrase(phrase);
        }
        for term in query.terms.iter().filter(|t| t.chars().count() >= MIN_MARKED_TERM_CHARS) {
            highlighter = highlighter.word(term, MatchStyle::Term);
        }
        let phrases_lower = query.lowercase_phrases();
        Self { query, phrases_lower, highlighter, highlight_limit }
    }

    pub fn query(&self) -> &ParsedQuery {
        &self.query
    }

    pub fn match_counts(&self, doc: &Document) -> MatchCounts {
        let title = doc.title.to_lowercase();
        let content = doc.content.to_lowercase();
        let tags: Vec<String> = doc.tags.iter().map(|t| t.to_lowercase()).collect();
        let terms = &self.query.terms;
        MatchCounts {
            title: terms.iter().filter(|t| title.contains(t.as_str())).count(),
            content: terms.iter().filter(|t| content.contains(t.as_str())).count(),
            tags: terms.iter().filter(|t| tags.iter().any(|tag| tag.contains(t.as_str()))).count(),
            phrases: self
                .phrases_lower
                .iter()
                .filter(|p| content.contains(p.as_str()) || title.contains(p.as_str()))
                .count(),
        }
    }

    /// Relevance in `[0, 1]`; zero for an empty query.
    pub fn score(&self, doc: &Document) -> f64 {
        if self.query.is_empty() {
            return 0.0;
        }
        self.match_counts(doc).weighted() / (self.query.len() as f64 * UNIT_NORMALIZER)
    }

    fn qualifies(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.query.terms.iter().any(|t| lower.contains(t.as_str()))
            || self.phrases_lower.iter().any(|p| lower.contains(p.as_str()))
    }

    /// Up to `highlight_limit` marked sentences, or `None` when no sentence
    /// contains a term or phrase.
    pub fn highlights(&self, doc: &Document) -> Option<Vec<String>> {
        let marked: Vec<String> = sentences(&doc.content)
            .filter(|s| self.qualifies(s))
            .take(self.highlight_limit)
            .map(|s| self.highlighter.mark(s))
            .collect();
        if marked.is_empty() { None } else { Some(marked) }
    }

    /// Scores every document, drops zero scores and sorts by descending
    /// score. Equal scores keep their input order.
    pub fn rank<'d, I>(&self, docs: I) -> Vec<ScoredResult>
    where
        I: IntoIterator<Item = &'d Document>,
    {
        if self.query.is_empty() {
            return Vec::new();
        }
        let mut candidates = 0usize;
        let mut results: Vec<ScoredResult> = docs
            .into_iter()
            .inspect(|_| candidates += 1)
            .filter_map(|doc| {
                let score = self.score(doc);
                (score > 0.0).then(|| ScoredResult { document: doc.clone(), score, highlights: self.highlights(doc) })
            })
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        tracing::debug!(candidates, matched = results.len(), "ranked documents");
        results
    }
}
