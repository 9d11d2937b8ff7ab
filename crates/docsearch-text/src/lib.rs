//! docsearch-text
//!
//! Lexical building blocks: tokenization, keyword and phrase extraction,
//! query parsing, scoring and highlighting. Everything here is a pure
//! function of its inputs; state lives in `docsearch-engine`.

pub mod excerpt;
mod frequency;
pub mod highlight;
pub mod keywords;
pub mod phrases;
pub mod query;
pub mod score;
pub mod tagging;
pub mod tokenize;

pub use excerpt::{highlight_matches, leading_text};
pub use keywords::extract_keywords;
pub use phrases::extract_phrases;
pub use query::{parse_query, ParsedQuery};
pub use score::{MatchCounts, Scorer};
pub use tagging::{suggest_tags, summarize};
pub use tokenize::tokenize;
