//! Ordered, id-unique document collection with a generation stamp.
//!
//! Every successful mutation bumps `generation`, which is what derived
//! caches key on.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{Document, DocumentId};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    ids: HashSet<DocumentId>,
    generation: u64,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from documents in newest-first order. Later duplicates
    /// of an id are dropped and returned to the caller.
    pub fn from_documents(documents: Vec<Document>) -> (Self, Vec<Document>) {
        let mut corpus = Self::new();
        let mut rejected = Vec::new();
        for doc in documents {
            if corpus.ids.insert(doc.id.clone()) {
                corpus.documents.push(doc);
            } else {
                rejected.push(doc);
            }
        }
        (corpus, rejected)
    }

    /// Prepends `doc` so the corpus stays newest first.
    pub fn insert(&mut self, doc: Document) -> Result<()> {
        if self.ids.contains(&doc.id) {
            return Err(Error::DuplicateDocument(doc.id));
        }
        self.ids.insert(doc.id.clone());
        self.documents.insert(0, doc);
        self.generation += 1;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Document> {
        if !self.ids.remove(id) {
            return None;
        }
        let pos = self.documents.iter().position(|d| d.id == id)?;
        self.generation += 1;
        Some(self.documents.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        if !self.ids.contains(id) {
            return None;
        }
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All document contents joined by a single space.
    pub fn joined_content(&self) -> String {
        self.documents.iter().map(|d| d.content.as_str()).collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(id: &str) -> Document {
        Document::new(id, format!("title {id}"), format!("content {id}"), vec![], Utc::now())
    }

    #[test]
    fn insert_prepends_and_bumps_generation() {
        let mut corpus = Corpus::new();
        corpus.insert(doc("a")).unwrap();
        corpus.insert(doc("b")).unwrap();
        let ids: Vec<_> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(corpus.generation(), 2);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_mutation() {
        let mut corpus = Corpus::new();
        corpus.insert(doc("a")).unwrap();
        let err = corpus.insert(doc("a")).unwrap_err();
        assert!(matches!(err, Error::DuplicateDocument(id) if id == "a"));
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.generation(), 1);
    }

    #[test]
    fn removing_unknown_id_keeps_generation() {
        let mut corpus = Corpus::new();
        corpus.insert(doc("a")).unwrap();
        assert!(corpus.remove("zzz").is_none());
        assert_eq!(corpus.generation(), 1);
        assert_eq!(corpus.remove("a").map(|d| d.id), Some("a".to_string()));
        assert_eq!(corpus.generation(), 2);
        assert!(corpus.is_empty());
    }

    #[test]
    fn from_documents_drops_later_duplicates() {
        let (corpus, rejected) = Corpus::from_documents(vec![doc("a"), doc("b"), doc("a")]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(corpus.joined_content(), "content a content b");
    }
}
