use std::cell::OnceCell;

use chrono::{DateTime, Utc};

use docsearch_core::config::EngineSettings;
use docsearch_core::corpus::Corpus;
use docsearch_core::seed::seed_documents;
use docsearch_core::types::{Document, SearchHistoryEntry, SearchResponse, Snapshot, Suggestion};
use docsearch_core::Result;
use docsearch_text::{highlight_matches, parse_query, Scorer};

use crate::derived::DerivedTerms;
use crate::history::SearchHistory;
use crate::suggest::suggest;

/// Owns the corpus, the search history and the derived term cache.
///
/// Reads take `&self`; the corpus and the history only change through the
/// `&mut self` methods, which keep the cache in step with the corpus.
#[derive(Debug)]
pub struct SearchContext {
    corpus: Corpus,
    history: SearchHistory,
    settings: EngineSettings,
    derived: OnceCell<DerivedTerms>,
}

impl SearchContext {
    /// An empty context.
    pub fn new(settings: EngineSettings) -> Self {
        let history = SearchHistory::new(settings.history_cap);
        Self { corpus: Corpus::new(), history, settings, derived: OnceCell::new() }
    }

    /// Rebuilds a context from a stored snapshot, or from the seed documents
    /// when nothing has been stored yet. Records that would break the corpus
    /// or history invariants are dropped with a warning.
    pub fn restore(snapshot: Option<Snapshot>, settings: EngineSettings) -> Self {
        let snapshot = snapshot.unwrap_or_else(|| {
            tracing::info!("no snapshot found, starting from seed documents");
            Snapshot { documents: seed_documents(Utc::now()), history: Vec::new() }
        });
        let (corpus, rejected) = Corpus::from_documents(snapshot.documents);
        for doc in &rejected {
            tracing::warn!(id = %doc.id, "dropping document with duplicate id");
        }
        let (history, dropped) = SearchHistory::from_entries(snapshot.history, settings.history_cap);
        if dropped > 0 {
            tracing::warn!(dropped, "dropping blank, repeated or over-cap history entries");
        }
        tracing::debug!(documents = corpus.len(), history = history.len(), "restored search context");
        Self { corpus, history, settings, derived: OnceCell::new() }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot { documents: self.corpus.documents().to_vec(), history: self.history.entries().to_vec() }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn derived(&self) -> &DerivedTerms {
        let terms = self.derived.get_or_init(|| DerivedTerms::compute(&self.corpus, &self.settings));
        debug_assert_eq!(terms.generation, self.corpus.generation());
        terms
    }

    fn invalidate_stale_terms(&mut self) {
        let generation = self.corpus.generation();
        if self.derived.get().is_some_and(|terms| terms.generation != generation) {
            self.derived.take();
        }
    }

    /// Ranked results for `query`. Does not touch the history.
    pub fn search(&self, query: &str) -> SearchResponse {
        if query.trim().is_empty() {
            return SearchResponse::empty(query);
        }
        let scorer = Scorer::new(parse_query(query), &self.settings.markup, self.settings.highlight_limit);
        let results = scorer.rank(self.corpus.iter());
        tracing::debug!(query, results = results.len(), "search");
        SearchResponse { results, query: query.to_string() }
    }

    pub fn record_query(&mut self, query: &str) {
        self.record_query_at(query, Utc::now());
    }

    pub fn record_query_at(&mut self, query: &str, at: DateTime<Utc>) {
        if let Some(entry) = self.history.record_at(query, at) {
            tracing::debug!(query = %entry.query, count = entry.count, "recorded query");
        }
    }

    pub fn suggestions(&self, prefix: &str) -> Vec<Suggestion> {
        suggest(prefix, &self.history, self.derived(), self.settings.suggestion_limit)
    }

    /// Excerpts of one document for `query`, falling back to the leading text
    /// when nothing matches. `None` for an unknown id.
    pub fn excerpts(&self, id: &str, query: &str) -> Option<Vec<String>> {
        let doc = self.corpus.get(id)?;
        Some(highlight_matches(&doc.content, &parse_query(query), &self.settings.markup, self.settings.highlight_limit))
    }

    pub fn add_document(&mut self, doc: Document) -> Result<()> {
        let id = doc.id.clone();
        self.corpus.insert(doc)?;
        self.invalidate_stale_terms();
        tracing::info!(%id, documents = self.corpus.len(), "added document");
        Ok(())
    }

    pub fn delete_document(&mut self, id: &str) -> Option<Document> {
        let removed = self.corpus.remove(id)?;
        self.invalidate_stale_terms();
        tracing::info!(%id, documents = self.corpus.len(), "deleted document");
        Some(removed)
    }

    pub fn keywords(&self) -> &[String] {
        &self.derived().keywords
    }

    pub fn phrases(&self) -> &[String] {
        &self.derived().phrases
    }

    pub fn tags(&self) -> &[String] {
        &self.derived().tags
    }

    pub fn documents(&self) -> &[Document] {
        self.corpus.documents()
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.corpus.get(id)
    }

    pub fn history(&self) -> &[SearchHistoryEntry] {
        self.history.entries()
    }

    pub fn generation(&self) -> u64 {
        self.corpus.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, content: &str) -> Document {
        Document::new(id, id, content, vec![], Utc::now())
    }

    #[test]
    fn cached_terms_follow_the_generation() {
        let mut ctx = SearchContext::new(EngineSettings::default());
        assert!(ctx.keywords().is_empty());

        ctx.add_document(doc("a", "gardening tips")).unwrap();
        assert_eq!(ctx.keywords(), ["gardening", "tips"]);
        assert_eq!(ctx.derived().generation, ctx.generation());

        ctx.delete_document("a").unwrap();
        assert!(ctx.keywords().is_empty());
    }

    #[test]
    fn failed_mutations_keep_the_cache() {
        let mut ctx = SearchContext::new(EngineSettings::default());
        ctx.add_document(doc("a", "orchard pruning")).unwrap();
        let before = ctx.derived() as *const DerivedTerms;
        assert!(ctx.add_document(doc("a", "different")).is_err());
        assert!(ctx.delete_document("missing").is_none());
        assert_eq!(ctx.derived() as *const DerivedTerms, before);
    }
}
