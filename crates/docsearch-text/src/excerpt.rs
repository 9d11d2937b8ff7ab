//! Standalone excerpt extraction with a fallback chain.
//!
//! Tiers, first non-empty wins: matching paragraphs → matching sentences →
//! sentences with a partial word match → the leading characters of the text.
//! The result is never empty.

use docsearch_core::config::MarkupSettings;

use crate::highlight::{paragraphs, sentences, Highlighter, MatchStyle};
use crate::query::ParsedQuery;

/// Length of the leading-text fallback, in characters.
pub const FALLBACK_CHARS: usize = 200;

/// Words of at most this many characters must match whole in the partial tier.
const PARTIAL_EXACT_MAX_CHARS: usize = 4;

/// Marked excerpts of `text` for `query`, at most `limit` of them.
pub fn highlight_matches(text: &str, query: &ParsedQuery, markup: &MarkupSettings, limit: usize) -> Vec<String> {
    let words: Vec<&str> = query.words().collect();
    let phrases = query.lowercase_phrases();
    if words.is_empty() && phrases.is_empty() {
        return vec![leading_text(text)];
    }

    let mut exact = Highlighter::new(markup.clone());
    for phrase in &query.phrases {
        exact = exact.phrase(phrase);
    }
    for word in &words {
        exact = exact.word(word, MatchStyle::Term);
    }
    let qualifies = |s: &str| {
        let lower = s.to_lowercase();
        words.iter().any(|w| lower.contains(*w)) || phrases.iter().any(|p| lower.contains(p.as_str()))
    };

    let mut matches: Vec<String> = paragraphs(text).filter(|p| qualifies(*p)).take(limit).map(|p| exact.mark(p)).collect();

    if matches.is_empty() {
        matches = sentences(text).filter(|s| qualifies(*s)).take(limit).map(|s| exact.mark(s)).collect();
    }

    if matches.is_empty() && !words.is_empty() {
        let partial = partial_highlighter(&words, markup);
        matches = sentences(text).filter(|s| partial.is_match(*s)).take(limit).map(|s| partial.mark(s)).collect();
    }

    if matches.is_empty() {
        return vec![leading_text(text)];
    }
    matches
}

/// Short words must match whole; longer words match any word sharing their
/// first four characters.
fn partial_highlighter(words: &[&str], markup: &MarkupSettings) -> Highlighter {
    let mut partial = Highlighter::new(markup.clone());
    for word in words {
        if word.chars().count() <= PARTIAL_EXACT_MAX_CHARS {
            partial = partial.word(word, MatchStyle::Term);
        } else {
            let prefix: String = word.chars().take(PARTIAL_EXACT_MAX_CHARS).collect();
            partial = partial.word_containing(&prefix);
        }
    }
    partial
}

/// The first [`FALLBACK_CHARS`] characters, with an ellipsis when cut.
pub fn leading_text(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(FALLBACK_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn excerpt(text: &str, q: &str) -> Vec<String> {
        highlight_matches(text, &parse_query(q), &MarkupSettings::default(), 3)
    }

    #[test]
    fn paragraph_tier_wins_first() {
        let text = "Neural nets are layered.\nUnrelated paragraph here.\nMore about neural nets";
        let got = excerpt(text, "neural");
        assert_eq!(
            got,
            vec![
                r#"<mark class="term">Neural</mark> nets are layered."#,
                r#"More about <mark class="term">neural</mark> nets"#,
            ]
        );
    }

    #[test]
    fn phrase_is_marked_before_words() {
        let got = excerpt("We use machine learning for learning tasks.", r#""machine learning" learning"#);
        assert_eq!(
            got,
            vec![r#"We use <mark class="phrase">machine learning</mark> for <mark class="term">learning</mark> tasks."#]
        );
    }

    #[test]
    fn partial_tier_matches_word_prefix() {
        let text = "Students were learners at heart. Nothing else matters here.";
        let got = excerpt(text, "learning");
        assert_eq!(got, vec![r#"Students were <mark class="partial">learners</mark> at heart"#]);
    }

    #[test]
    fn short_words_need_whole_word_match_in_partial_tier() {
        let text = "The datum was recorded carefully. Nothing else matters here.";
        let got = excerpt(text, "data");
        assert_eq!(got, vec![leading_text(text)]);
    }

    #[test]
    fn falls_back_to_leading_text() {
        let text = "x".repeat(250);
        let got = excerpt(&text, "nothing");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0], format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn short_text_fallback_is_not_cut() {
        assert_eq!(excerpt("Tiny text.", "zebra"), vec!["Tiny text."]);
    }

    #[test]
    fn query_without_usable_words_returns_leading_text() {
        assert_eq!(excerpt("Some content body.", "ai ml"), vec!["Some content body."]);
    }

    #[test]
    fn leading_text_respects_char_boundaries() {
        let text = "é".repeat(201);
        assert_eq!(leading_text(&text), format!("{}...", "é".repeat(200)));
    }
}
