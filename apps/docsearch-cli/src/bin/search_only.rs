use std::env;
use std::path::PathBuf;

use docsearch_cli::{init_tracing, print_results};
use docsearch_core::config::EngineSettings;
use docsearch_core::data_processor::DocumentLoader;
use docsearch_core::types::Snapshot;
use docsearch_engine::SearchContext;
use docsearch_text::suggest_tags;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [docs_dir]", args[0]);
        eprintln!("Example: {} '\"machine learning\" ai' ./docs", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let docs_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("./docs"));
    println!("🔍 docsearch-search-only\n==================");
    println!("Query: {}", query_text); println!("Docs directory: {}", docs_dir.display());

    let documents = DocumentLoader::new().with_tagger(suggest_tags).load_directory(&docs_dir)?;
    let ctx = SearchContext::restore(Some(Snapshot { documents, history: Vec::new() }), EngineSettings::default());
    print_results(&ctx, query_text);

    println!("\n💡 Suggestions:");
    for s in ctx.suggestions(query_text) { println!("  {}", s.text); }
    Ok(())
}
