//! Shared pieces of the docsearch binaries.

use docsearch_engine::SearchContext;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` overrides
/// the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Prints ranked results for `query`. Results without sentence highlights
/// show excerpts from the fallback chain instead.
pub fn print_results(ctx: &SearchContext, query: &str) {
    let response = ctx.search(query);
    println!("🔍 Found {} results for: \"{}\"", response.results.len(), query);
    for (i, result) in response.results.iter().enumerate() {
        let doc = &result.document;
        println!("\n  {}. score={:.4}  id={}  title={}", i + 1, result.score, doc.id, doc.title);
        if !doc.tags.is_empty() {
            println!("     🏷  {}", doc.tags.join(", "));
        }
        let snippets = match &result.highlights {
            Some(highlights) => highlights.clone(),
            None => ctx.excerpts(&doc.id, query).unwrap_or_default(),
        };
        for snippet in snippets {
            println!("     📝 {}", snippet);
        }
    }
}
