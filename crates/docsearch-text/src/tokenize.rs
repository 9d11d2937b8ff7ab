//! Normalization and stopword filtering.
//!
//! Pipeline: lowercase → strip punctuation → split on whitespace → drop short
//! tokens and stopwords. Keywords and phrases use different filters: phrases
//! keep more function words so that "state of the art" style n-grams survive.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Characters removed before splitting. Apostrophes are kept so that
/// contractions can match the stopword list.
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~', '(', ')',
];

/// Common English words that never make useful keywords.
pub const KEYWORD_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can't", "cannot", "could", "couldn't",
    "did", "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during",
    "each", "few", "for", "from", "further", "had", "hadn't", "has", "hasn't", "have",
    "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers",
    "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more",
    "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
    "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than",
    "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
    "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
    "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Articles, auxiliaries and a few prepositions; the lighter list used for n-grams.
pub const PHRASE_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were",
    "be", "been", "being", "to", "of", "in", "for", "with", "by", "at",
    "this", "that", "these", "those", "it", "its",
];

/// Minimum length and stopword set applied to normalized tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter {
    pub min_len: usize,
    stopwords: fn() -> &'static HashSet<&'static str>,
}

/// Keywords: at least 4 characters, large stopword list.
pub const KEYWORD_FILTER: TokenFilter = TokenFilter { min_len: 4, stopwords: keyword_stopwords };

/// Phrase tokens: at least 3 characters, small stopword list.
pub const PHRASE_FILTER: TokenFilter = TokenFilter { min_len: 3, stopwords: phrase_stopwords };

impl TokenFilter {
    pub fn accepts(&self, token: &str) -> bool {
        token.chars().count() >= self.min_len && !(self.stopwords)().contains(token)
    }

    /// Tokenizes `text` and keeps only the tokens this filter accepts.
    pub fn apply(&self, text: &str) -> Vec<String> {
        tokenize(text).into_iter().filter(|t| self.accepts(t)).collect()
    }
}

fn keyword_stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| KEYWORD_STOPWORDS.iter().copied().collect())
}

fn phrase_stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| PHRASE_STOPWORDS.iter().copied().collect())
}

/// Lowercases and strips the fixed punctuation set.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Normalized tokens in input order, stopwords included.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text).split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World! (NLP) e-mail"), vec!["hello", "world", "nlp", "email"]);
    }

    #[test]
    fn keeps_apostrophes_and_other_symbols() {
        assert_eq!(tokenize("don't stop? @home"), vec!["don't", "stop?", "@home"]);
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
        assert!(tokenize("... --- ()").is_empty());
    }

    #[test]
    fn keyword_filter_drops_short_tokens_and_stopwords() {
        let kept = KEYWORD_FILTER.apply("The cats would rather sleep than hunt mice");
        assert_eq!(kept, vec!["cats", "rather", "sleep", "hunt", "mice"]);
    }

    #[test]
    fn keyword_filter_drops_contractions() {
        assert!(KEYWORD_FILTER.apply("wouldn't shouldn't").is_empty());
    }

    #[test]
    fn phrase_filter_is_lighter() {
        let kept = PHRASE_FILTER.apply("the state of the art for neural nets");
        assert_eq!(kept, vec!["state", "art", "neural", "nets"]);
        assert!(PHRASE_FILTER.accepts("than"), "'than' is only a keyword stopword");
        assert!(!KEYWORD_FILTER.accepts("than"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(KEYWORD_FILTER.accepts("café"));
        assert!(!KEYWORD_FILTER.accepts("été"));
    }
}
