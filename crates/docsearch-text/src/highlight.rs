//! Inline marking of query matches.
//!
//! Matches are collected as byte ranges over the original text, pattern by
//! pattern in priority order; a later pattern never marks text that overlaps
//! an earlier match. Phrases are registered before terms, so a term inside a
//! marked phrase is left alone and the phrase mark stays in one piece.

use regex::Regex;

use docsearch_core::config::MarkupSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStyle {
    Phrase,
    Term,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
    pub style: MatchStyle,
}

impl MatchRange {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<(Regex, MatchStyle)>,
    markup: MarkupSettings,
}

impl Highlighter {
    pub fn new(markup: MarkupSettings) -> Self {
        Self { patterns: Vec::new(), markup }
    }

    /// Case-insensitive literal match anywhere in the text.
    pub fn phrase(self, phrase: &str) -> Self {
        let pattern = format!("(?i){}", regex::escape(phrase));
        self.push(&pattern, MatchStyle::Phrase)
    }

    /// Case-insensitive whole-word match.
    pub fn word(self, word: &str, style: MatchStyle) -> Self {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
        self.push(&pattern, style)
    }

    /// Whole words that contain `fragment`, e.g. `lear` marks "learning".
    pub fn word_containing(self, fragment: &str) -> Self {
        let pattern = format!(r"(?i)\b\w*{}\w*\b", regex::escape(fragment));
        self.push(&pattern, MatchStyle::Partial)
    }

    fn push(mut self, pattern: &str, style: MatchStyle) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.patterns.push((re, style)),
            Err(e) => tracing::debug!(pattern, error = %e, "skipping unusable highlight pattern"),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|(re, _)| re.is_match(text))
    }

    /// Non-overlapping match ranges sorted by start offset.
    pub fn ranges(&self, text: &str) -> Vec<MatchRange> {
        let mut ranges: Vec<MatchRange> = Vec::new();
        for (re, style) in &self.patterns {
            for m in re.find_iter(text) {
                if m.start() == m.end() || ranges.iter().any(|r| r.overlaps(m.start(), m.end())) {
                    continue;
                }
                ranges.push(MatchRange { start: m.start(), end: m.end(), style: *style });
            }
        }
        ranges.sort_unstable_by_key(|r| r.start);
        ranges
    }

    pub fn mark(&self, text: &str) -> String {
        let ranges = self.ranges(text);
        if ranges.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + ranges.len() * 32);
        let mut cursor = 0;
        for range in ranges {
            let (open, close) = self.delimiters(range.style);
            out.push_str(&text[cursor..range.start]);
            out.push_str(open);
            out.push_str(&text[range.start..range.end]);
            out.push_str(close);
            cursor = range.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    fn delimiters(&self, style: MatchStyle) -> (&str, &str) {
        let m = &self.markup;
        match style {
            MatchStyle::Phrase => (m.phrase_open.as_str(), m.phrase_close.as_str()),
            MatchStyle::Term => (m.term_open.as_str(), m.term_close.as_str()),
            MatchStyle::Partial => (m.partial_open.as_str(), m.partial_close.as_str()),
        }
    }
}

/// Sentences split on runs of `.`, `!` and `?`, trimmed, at least 10 characters.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?']).map(str::trim).filter(|s| s.chars().count() >= 10)
}

/// Non-empty lines, i.e. text split on runs of newlines.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|p| !p.is_empty())
}
