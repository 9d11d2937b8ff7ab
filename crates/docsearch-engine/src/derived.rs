//! Corpus-wide term sets, recomputed only when the corpus generation moves.

use docsearch_core::config::EngineSettings;
use docsearch_core::corpus::Corpus;
use docsearch_text::{extract_keywords, extract_phrases};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedTerms {
    /// Corpus generation these sets were computed from.
    pub generation: u64,
    pub keywords: Vec<String>,
    pub phrases: Vec<String>,
    /// Lowercased, unique, in first-seen order.
    pub tags: Vec<String>,
}

impl DerivedTerms {
    pub fn compute(corpus: &Corpus, settings: &EngineSettings) -> Self {
        let generation = corpus.generation();
        if corpus.is_empty() {
            return Self { generation, ..Self::default() };
        }
        let text = corpus.joined_content();
        let terms = Self {
            generation,
            keywords: extract_keywords(&text, settings.keyword_limit),
            phrases: extract_phrases(&text, settings.phrase_limit),
            tags: unique_tags(corpus),
        };
        tracing::debug!(
            generation,
            keywords = terms.keywords.len(),
            phrases = terms.phrases.len(),
            tags = terms.tags.len(),
            "recomputed corpus terms"
        );
        terms
    }
}

fn unique_tags(corpus: &Corpus) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in corpus.iter().flat_map(|d| d.tags.iter()) {
        let lower = tag.to_lowercase();
        if !tags.contains(&lower) {
            tags.push(lower);
        }
    }
    tags
}
