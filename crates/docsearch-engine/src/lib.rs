//! docsearch-engine
//!
//! The stateful side of search: a [`SearchContext`] owning the corpus, the
//! query history and corpus-wide term sets, answering searches and
//! suggestions over them.

pub mod context;
pub mod derived;
pub mod history;
pub mod suggest;

pub use context::SearchContext;
pub use derived::DerivedTerms;
pub use history::SearchHistory;
pub use suggest::suggest;
