//! Raw query → quoted phrases + bare terms.

use regex::Regex;
use std::sync::OnceLock;

fn quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("static pattern"))
}

/// A query split into exact phrases and bare terms.
///
/// Phrases keep their original case and are compared case-insensitively;
/// terms are already lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub phrases: Vec<String>,
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Number of scoring units, i.e. the score denominator before weighting.
    pub fn len(&self) -> usize {
        self.terms.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lowercase_phrases(&self) -> Vec<String> {
        self.phrases.iter().map(|p| p.to_lowercase()).collect()
    }

    /// Terms long enough to be marked in excerpts.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str).filter(|t| t.chars().count() > 2)
    }
}

pub fn parse_query(raw: &str) -> ParsedQuery {
    let phrases = quoted()
        .captures_iter(raw)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    let remainder = quoted().replace_all(raw, "");
    let terms = remainder.to_lowercase().split_whitespace().map(str::to_string).collect();
    ParsedQuery { phrases, terms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_phrase_and_terms() {
        let q = parse_query(r#""machine learning" AI"#);
        assert_eq!(q.phrases, vec!["machine learning"]);
        assert_eq!(q.terms, vec!["ai"]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn phrase_only_query_has_no_terms() {
        let q = parse_query(r#""neural networks""#);
        assert_eq!(q.phrases, vec!["neural networks"]);
        assert!(q.terms.is_empty());
    }

    #[test]
    fn multiple_phrases_are_trimmed_and_keep_case() {
        let q = parse_query(r#"deep " Neural Nets " and "NLP""#);
        assert_eq!(q.phrases, vec!["Neural Nets", "NLP"]);
        assert_eq!(q.terms, vec!["deep", "and"]);
        assert_eq!(q.lowercase_phrases(), vec!["neural nets", "nlp"]);
    }

    #[test]
    fn blank_phrases_are_discarded() {
        let q = parse_query(r#""   " data"#);
        assert!(q.phrases.is_empty());
        assert_eq!(q.terms, vec!["data"]);
    }

    #[test]
    fn unbalanced_quote_stays_in_terms() {
        let q = parse_query(r#"open "quote"#);
        assert!(q.phrases.is_empty());
        assert_eq!(q.terms, vec!["open", "\"quote"]);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(parse_query("  \t ").is_empty());
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn words_skip_short_terms() {
        let q = parse_query("ai in machine learning");
        assert_eq!(q.words().collect::<Vec<_>>(), vec!["machine", "learning"]);
    }
}
