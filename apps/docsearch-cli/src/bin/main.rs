use std::env;
use std::path::PathBuf;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use docsearch_cli::{init_tracing, print_results};
use docsearch_core::config::{resolve_with_base, Config};
use docsearch_core::data_processor::DocumentLoader;
use docsearch_core::store::JsonFileStore;
use docsearch_core::traits::SnapshotStore;
use docsearch_core::types::{Document, SuggestionKind};
use docsearch_core::Error;
use docsearch_engine::SearchContext;
use docsearch_text::{suggest_tags, summarize};

const USAGE: &str = "<ingest|add|delete|search|suggest|terms|history|summarize> [args...] [--json]";

fn parse_args() -> (String, Vec<String>, bool) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");
    if args.is_empty() { eprintln!("Usage: {} {}", prog, USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args, json)
}

fn required(args: &[String], index: usize, usage: &str) -> String {
    args.get(index).cloned().unwrap_or_else(|| { eprintln!("Usage: docsearch {}", usage); std::process::exit(1) })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.engine_settings()?;
    let (cmd, args, json) = parse_args();

    let cwd = env::current_dir()?;
    let store_path: String = config.get("data.store_path").unwrap_or_else(|_| "~/.docsearch/snapshot.json".to_string());
    let store = JsonFileStore::new(resolve_with_base(&cwd, store_path));
    let mut ctx = SearchContext::restore(store.load()?, settings);

    match cmd.as_str() {
        "ingest" => {
            let data_dir = args.first().map(PathBuf::from).unwrap_or_else(|| {
                let dir: String = config.get("data.docs_dir").unwrap_or_else(|_| "docs".to_string()); resolve_with_base(&cwd, dir)
            });
            let limit = args.iter().position(|a| a == "--limit").and_then(|i| args.get(i + 1)).and_then(|n| n.parse::<usize>().ok());
            println!("Ingesting from {}", data_dir.display());
            let loader = DocumentLoader::new().with_tagger(suggest_tags);
            let documents = match limit {
                Some(limit) => loader.load_directory_limited(&data_dir, limit)?,
                None => loader.load_directory(&data_dir)?,
            };
            let pb = ProgressBar::new(documents.len() as u64);
            pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg}")?.progress_chars("#>-"));
            let (mut added, mut skipped) = (0usize, 0usize);
            for doc in documents {
                pb.set_message(doc.id.clone());
                match ctx.add_document(doc) {
                    Ok(()) => added += 1,
                    Err(Error::DuplicateDocument(id)) => { tracing::warn!(%id, "already in corpus, skipping"); skipped += 1; }
                    Err(e) => return Err(e.into()),
                }
                pb.inc(1);
            }
            pb.finish_with_message("done");
            store.save(&ctx.snapshot())?;
            println!("✅ Ingest complete ({} added, {} skipped, {} total)", added, skipped, ctx.documents().len());
        }
        "add" => {
            let usage = "add <title> <content> [tag1,tag2,...]";
            let title = required(&args, 0, usage);
            let content = required(&args, 1, usage);
            let tags: Vec<String> = match args.get(2) {
                Some(list) => list.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect(),
                None => suggest_tags(&content).into_iter().take(3).collect(),
            };
            let now = Utc::now();
            let doc = Document::new(now.timestamp_millis().to_string(), title, content, tags, now);
            let id = doc.id.clone();
            ctx.add_document(doc)?;
            store.save(&ctx.snapshot())?;
            println!("✅ Added document {}", id);
        }
        "delete" => {
            let id = required(&args, 0, "delete <id>");
            match ctx.delete_document(&id) {
                Some(doc) => { store.save(&ctx.snapshot())?; println!("🗑  Deleted {} ({})", doc.id, doc.title); }
                None => println!("No document with id {}", id),
            }
        }
        "search" => {
            let query = required(&args, 0, "search \"<query>\"");
            if json {
                println!("{}", serde_json::to_string_pretty(&ctx.search(&query))?);
            } else {
                print_results(&ctx, &query);
            }
            ctx.record_query(&query);
            store.save(&ctx.snapshot())?;
        }
        "suggest" => {
            let prefix = required(&args, 0, "suggest <prefix>");
            let suggestions = ctx.suggestions(&prefix);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for s in suggestions {
                    let kind = match s.kind {
                        SuggestionKind::History { count, .. } => format!("history×{}", count),
                        SuggestionKind::Keyword => "keyword".to_string(),
                        SuggestionKind::Phrase => "phrase".to_string(),
                        SuggestionKind::Tag => "tag".to_string(),
                    };
                    println!("  {:<11} {}", kind, s.text);
                }
            }
        }
        "terms" => {
            if json {
                let value = serde_json::json!({ "keywords": ctx.keywords(), "phrases": ctx.phrases(), "tags": ctx.tags() });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Keywords: {}", ctx.keywords().join(", "));
                println!("Phrases:  {}", ctx.phrases().join(", "));
                println!("Tags:     {}", ctx.tags().join(", "));
            }
        }
        "history" => {
            if json {
                println!("{}", serde_json::to_string_pretty(ctx.history())?);
            } else {
                for entry in ctx.history() { println!("  {:>3}× {}  (last {})", entry.count, entry.query, entry.last_searched.to_rfc3339()); }
            }
        }
        "summarize" => {
            let id = required(&args, 0, "summarize <id>");
            let doc = ctx.document(&id).ok_or_else(|| Error::NotFound(id.clone()))?;
            println!("{}", summarize(&doc.content));
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
