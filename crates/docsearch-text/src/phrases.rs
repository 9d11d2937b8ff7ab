//! Frequency-ranked 2- and 3-token phrases.
//!
//! Both window sizes share one frequency table. Phrases seen only once are
//! dropped: at this corpus size they are noise.

use crate::frequency::TermCounts;
use crate::tokenize::PHRASE_FILTER;

pub fn extract_phrases(text: &str, max_phrases: usize) -> Vec<String> {
    let tokens = PHRASE_FILTER.apply(text);
    let bigrams = tokens.windows(2).map(|w| w.join(" "));
    let trigrams = tokens.windows(3).map(|w| w.join(" "));
    let counts: TermCounts = bigrams.chain(trigrams).collect();
    counts.top(max_phrases, 2)
}
