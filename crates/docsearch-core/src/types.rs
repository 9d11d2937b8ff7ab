//! Domain types shared by the text and engine crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type DocumentId = String;

/// A searchable document.
///
/// - `id`: stable unique identifier within a corpus
/// - `title`/`content`: the text that is scored and highlighted
/// - `tags`: free-form labels; order is kept for display only
/// - `created_at`: creation time, serialized as `createdAt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id: id.into(), title: title.into(), content: content.into(), tags, created_at }
    }
}

/// One distinct query the user has issued.
///
/// `query` is trimmed and lowercased and acts as the key; `count` is bumped
/// every time the same query is recorded again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query: String,
    pub count: u32,
    #[serde(rename = "lastSearched")]
    pub last_searched: DateTime<Utc>,
}

/// Where a suggestion came from. Variants are listed in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SuggestionKind {
    History {
        count: u32,
        #[serde(rename = "lastSearched")]
        last_searched: DateTime<Utc>,
    },
    Keyword,
    Phrase,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(flatten)]
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn keyword(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SuggestionKind::Keyword }
    }

    pub fn phrase(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SuggestionKind::Phrase }
    }

    pub fn tag(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SuggestionKind::Tag }
    }

    pub fn history(entry: &SearchHistoryEntry) -> Self {
        Self {
            text: entry.query.clone(),
            kind: SuggestionKind::History { count: entry.count, last_searched: entry.last_searched },
        }
    }
}

/// A document that matched a query, with its relevance and marked-up excerpts.
///
/// `score` is always strictly positive for returned results. `highlights`
/// holds at most a few sentences and is `None` when no sentence qualified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub document: Document,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredResult>,
    pub query: String,
}

impl SearchResponse {
    pub fn empty(query: impl Into<String>) -> Self {
        Self { results: Vec::new(), query: query.into() }
    }
}

/// Everything the persistence collaborator needs to restore a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub documents: Vec<Document>,
    #[serde(default)]
    pub history: Vec<SearchHistoryEntry>,
}
