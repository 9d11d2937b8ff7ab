//! End-to-end checks over the public text API plus a few properties that
//! must hold for any input.

use chrono::Utc;
use docsearch_core::config::MarkupSettings;
use docsearch_core::types::Document;
use docsearch_text::highlight::{Highlighter, MatchStyle};
use docsearch_text::tokenize::{KEYWORD_FILTER, PHRASE_FILTER};
use docsearch_text::{extract_keywords, extract_phrases, highlight_matches, parse_query, Scorer};
use proptest::prelude::*;

fn doc(id: &str, title: &str, content: &str, tags: &[&str]) -> Document {
    Document::new(id, title, content, tags.iter().map(|t| t.to_string()).collect(), Utc::now())
}

fn plain_markup() -> MarkupSettings {
    MarkupSettings {
        phrase_open: "[[".into(),
        phrase_close: "]]".into(),
        term_open: "<".into(),
        term_close: ">".into(),
        partial_open: "{".into(),
        partial_close: "}".into(),
    }
}

#[test]
fn quoted_query_ranks_exact_phrase_first() {
    let docs = [
        doc("scattered", "Notes", "The machine kept learning from AI logs.", &[]),
        doc("exact", "Notes", "Machine learning is a field of AI research.", &["ml"]),
        doc("miss", "Cooking", "Bread needs flour and water.", &[]),
    ];
    let scorer = Scorer::new(parse_query(r#""machine learning" AI"#), &MarkupSettings::default(), 3);
    let ranked = scorer.rank(docs.iter());

    let ids: Vec<_> = ranked.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, vec!["exact", "scattered"]);
    let top = ranked[0].highlights.as_ref().expect("exact match has a highlight");
    assert!(top[0].starts_with(r#"<mark class="phrase">Machine learning</mark>"#));
}

#[test]
fn corpus_terms_from_joined_content() {
    let contents = [
        "Neural networks learn representations. Neural networks generalize.",
        "Training neural networks needs data. More data helps training.",
    ];
    let joined = contents.join(" ");
    let keywords = extract_keywords(&joined, 3);
    assert_eq!(keywords, vec!["neural", "networks", "training"]);

    let phrases = extract_phrases(&joined, 20);
    assert_eq!(phrases[0], "neural networks");
    assert!(phrases.iter().all(|p| p != "learn representations"));
}

#[test]
fn excerpt_chain_never_returns_nothing() {
    let markup = MarkupSettings::default();
    let text = "Alpha section text.\nBeta section text.";
    assert_eq!(highlight_matches(text, &parse_query("gamma"), &markup, 3), vec![text.to_string()]);
    assert_eq!(highlight_matches("", &parse_query("gamma"), &markup, 3), vec![String::new()]);
}

proptest! {
    #[test]
    fn score_is_bounded(
        title in "[a-zA-Z ]{0,30}",
        content in "[a-zA-Z .!?]{0,120}",
        tags in proptest::collection::vec("[a-zA-Z]{1,10}", 0..4),
        query in "[a-zA-Z \"]{0,40}",
    ) {
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let d = doc("p", &title, &content, &tag_refs);
        let scorer = Scorer::new(parse_query(&query), &MarkupSettings::default(), 3);
        let score = scorer.score(&d);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn ranking_is_sorted_and_positive(
        contents in proptest::collection::vec("[a-d ]{0,40}", 0..8),
        query in "[a-d ]{1,12}",
    ) {
        let docs: Vec<Document> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| doc(&i.to_string(), "", c, &[]))
            .collect();
        let scorer = Scorer::new(parse_query(&query), &MarkupSettings::default(), 3);
        let ranked = scorer.rank(docs.iter());
        prop_assert!(ranked.iter().all(|r| r.score > 0.0));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        let again = scorer.rank(docs.iter());
        let first: Vec<_> = ranked.iter().map(|r| r.document.id.clone()).collect();
        let second: Vec<_> = again.iter().map(|r| r.document.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn keywords_are_unique_filtered_and_capped(text in "[a-zA-Z ,.']{0,200}", max in 0usize..10) {
        let keywords = extract_keywords(&text, max);
        prop_assert!(keywords.len() <= max);
        for (i, k) in keywords.iter().enumerate() {
            prop_assert!(KEYWORD_FILTER.accepts(k));
            prop_assert!(!keywords[..i].contains(k));
        }
    }

    #[test]
    fn phrases_are_short_ngrams_of_accepted_tokens(text in "[a-c ]{0,200}", max in 0usize..10) {
        let phrases = extract_phrases(&text, max);
        prop_assert!(phrases.len() <= max);
        for p in &phrases {
            let words: Vec<&str> = p.split(' ').collect();
            prop_assert!(words.len() == 2 || words.len() == 3);
            prop_assert!(words.iter().all(|w| PHRASE_FILTER.accepts(w)));
        }
    }

    #[test]
    fn parsed_terms_are_lowercase_and_nonempty(raw in "[a-zA-Z \"]{0,60}") {
        let q = parse_query(&raw);
        for t in &q.terms {
            prop_assert!(!t.is_empty());
            prop_assert!(!t.contains(char::is_whitespace));
            prop_assert_eq!(t.clone(), t.to_lowercase());
        }
        prop_assert!(q.phrases.iter().all(|p| !p.is_empty() && !p.contains('"')));
    }

    #[test]
    fn marking_only_inserts_delimiters(text in "[a-z .]{0,80}", word in "[a-z]{1,4}") {
        let h = Highlighter::new(plain_markup()).phrase(&word).word(&word, MatchStyle::Term);
        let marked = h.mark(&text);
        let stripped: String = marked.chars().filter(|c| !"[]<>{}".contains(*c)).collect();
        prop_assert_eq!(stripped, text);
    }

    #[test]
    fn excerpts_are_never_empty(text in "[a-zA-Z .\n]{0,300}", query in "[a-zA-Z \"]{0,30}") {
        let got = highlight_matches(&text, &parse_query(&query), &MarkupSettings::default(), 3);
        prop_assert!(!got.is_empty() && got.len() <= 3);
    }
}
