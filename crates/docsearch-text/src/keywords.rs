//! Frequency-ranked single-token keywords.

use crate::frequency::TermCounts;
use crate::tokenize::KEYWORD_FILTER;

/// Most frequent keyword tokens in `text`, at most `max_keywords`. Ties keep
/// the order in which the tokens first appear.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let counts: TermCounts = KEYWORD_FILTER.apply(text).into_iter().collect();
    counts.top(max_keywords, 1)
}
