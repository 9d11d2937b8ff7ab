//! Ingestion helpers: tag suggestions and a short summary for new documents.

use regex::Regex;
use std::sync::OnceLock;

use crate::frequency::TermCounts;

const MAX_CAPITALIZED: usize = 3;
const MAX_TOP_WORDS: usize = 5;
const MAX_TAG_CHARS: usize = 15;
const TAG_STOPWORDS: &[&str] = &["this", "that", "with", "from", "have", "were"];

const SUMMARY_MIN_CHARS: usize = 200;
const SUMMARY_PARAGRAPH_CHARS: usize = 100;
const SUMMARY_BUDGET_CHARS: usize = 500;

fn capitalized_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z][a-z]+ (?:[A-Z][a-z]+ )*[A-Z][a-z]+\b").expect("static pattern"))
}

fn long_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-z]{4,}\b").expect("static pattern"))
}

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("static pattern"))
}

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("static pattern"))
}

fn word_counts(text: &str) -> TermCounts {
    let lower = text.to_lowercase();
    long_word().find_iter(&lower).map(|m| m.as_str()).collect()
}

/// Candidate tags for `text`: a few Title Case runs ("Deep Neural Networks"),
/// then the most frequent longer words. Long tags are shortened.
pub fn suggest_tags(text: &str) -> Vec<String> {
    let capitalized = capitalized_run().find_iter(text).take(MAX_CAPITALIZED).map(|m| m.as_str().to_string());
    let top_words = word_counts(text)
        .top(usize::MAX, 1)
        .into_iter()
        .filter(|w| !TAG_STOPWORDS.contains(&w.as_str()))
        .take(MAX_TOP_WORDS);

    let mut tags: Vec<String> = Vec::new();
    for tag in capitalized.chain(top_words) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags.into_iter().map(|tag| shorten(&tag)).collect()
}

fn shorten(tag: &str) -> String {
    match tag.char_indices().nth(MAX_TAG_CHARS) {
        Some((cut, _)) => format!("{}...", &tag[..cut]),
        None => tag.to_string(),
    }
}

/// A short summary: the opening paragraph or first few sentences, followed by
/// the words that recur most.
pub fn summarize(text: &str) -> String {
    if text.chars().count() < SUMMARY_MIN_CHARS {
        return text.to_string();
    }

    let first_paragraph = paragraph_break().split(text).next().unwrap_or_default();
    let mut summary = String::new();
    if first_paragraph.chars().count() > SUMMARY_PARAGRAPH_CHARS {
        summary.push_str(first_paragraph);
    } else {
        let mut used = 0;
        for sentence in sentence_break().split(text) {
            if used >= SUMMARY_BUDGET_CHARS {
                break;
            }
            summary.push_str(sentence);
            summary.push_str(". ");
            used += sentence.chars().count();
        }
    }

    let key_terms = word_counts(text).top(MAX_TOP_WORDS, 2);
    if !key_terms.is_empty() {
        summary.push_str("\n\nKey terms: ");
        summary.push_str(&key_terms.join(", "));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalized_runs_come_first() {
        let text = "Deep Learning and Neural Networks power modern systems. Systems learn.";
        let tags = suggest_tags(text);
        assert_eq!(&tags[..2], &["Deep Learning", "Neural Networks"]);
        assert!(tags.contains(&"systems".to_string()));
    }

    #[test]
    fn stop_list_and_short_words_are_excluded() {
        let tags = suggest_tags("this that with from have were data data cat");
        assert_eq!(tags, vec!["data"]);
    }

    #[test]
    fn long_tags_are_shortened() {
        let tags = suggest_tags("Internationalization Standards Committee met");
        assert_eq!(tags[0], "Internationaliz...");
    }

    #[test]
    fn short_text_is_its_own_summary() {
        assert_eq!(summarize("A short note."), "A short note.");
    }

    #[test]
    fn long_first_paragraph_is_used() {
        let para = "Graph databases store nodes and edges. ".repeat(4);
        let text = format!("{}\n\n{}", para.trim_end(), "Second paragraph text. ".repeat(3));
        let summary = summarize(&text);
        assert!(summary.starts_with("Graph databases store nodes and edges."));
        assert!(!summary.contains("Second paragraph"));
        assert!(summary.contains("Key terms: graph, databases, store, nodes, edges"));
    }

    #[test]
    fn sentences_accumulate_when_first_paragraph_is_short() {
        let text = format!("Title line\n\n{}", "Sentence about caching layers. ".repeat(30));
        let summary = summarize(&text);
        assert!(summary.starts_with("Title line\n\nSentence about caching layers. "));
        let body = summary.split("\n\nKey terms:").next().unwrap();
        assert!(body.chars().count() < text.chars().count());
    }
}
