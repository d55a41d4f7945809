//! Command implementations for Schiltron CLI.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::read_corpus;
use crate::error::Result;
use crate::index::config::DuplicatePolicy;
use crate::search::{SearchConfig, SearchEngine};

/// Execute a CLI command.
pub fn execute_command(args: SchiltronArgs) -> Result<()> {
    let config = load_config(&args)?;
    let engine = open_engine(args.command.corpus(), config)?;

    match &args.command {
        Command::Search(search_args) => search(&engine, search_args, &args),
        Command::Index(index_args) => show_postings(&engine, index_args, &args),
        Command::Stats(stats_args) => show_stats(&engine, stats_args, &args),
        Command::Repl(_) => run_repl(&engine, &args),
    }
}

/// Resolve the search configuration: config file first, then flag overrides.
pub fn load_config(args: &SchiltronArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            SearchConfig::from_json_file(path)?
        }
        None => SearchConfig::default(),
    };

    if let Some(prefix) = &args.prefix {
        config.doc_prefix = prefix.clone();
    }
    if args.reject_duplicates {
        config.index.duplicate_policy = DuplicatePolicy::Reject;
    }

    config.validate()?;
    Ok(config)
}

/// Read a corpus file and build a search engine over it.
pub fn open_engine(corpus: &Path, config: SearchConfig) -> Result<SearchEngine> {
    log::info!("Indexing corpus: {}", corpus.display());
    let start_time = Instant::now();

    let lines = read_corpus(corpus)?;
    let engine = SearchEngine::from_lines(&lines, config)?;

    log::info!(
        "Indexed {} documents in {}ms",
        engine.index().doc_count(),
        start_time.elapsed().as_millis()
    );
    Ok(engine)
}

/// Evaluate every query against the index.
fn search(engine: &SearchEngine, args: &SearchArgs, cli_args: &SchiltronArgs) -> Result<()> {
    let start_time = Instant::now();
    let results = args.queries.iter().map(|q| engine.search(q)).collect();

    output_result(
        "Search completed",
        &SearchReport {
            results,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show posting lists for the requested terms, or for every term.
fn show_postings(engine: &SearchEngine, args: &IndexArgs, cli_args: &SchiltronArgs) -> Result<()> {
    let index = engine.index();
    let terms: Vec<&str> = if args.terms.is_empty() {
        index.terms()
    } else {
        args.terms.iter().map(String::as_str).collect()
    };

    let terms = terms
        .into_iter()
        .map(|term| match index.get(term) {
            Some(postings) => TermPostings {
                term: term.to_string(),
                found: true,
                doc_ids: postings.as_slice().to_vec(),
                documents: postings.iter().map(|id| engine.render(id)).collect(),
            },
            None => {
                log::warn!("Term '{term}' is not in the documents");
                TermPostings {
                    term: term.to_string(),
                    found: false,
                    doc_ids: Vec::new(),
                    documents: Vec::new(),
                }
            }
        })
        .collect();

    output_result("Posting lists", &PostingsReport { terms }, cli_args)
}

/// Show index statistics.
fn show_stats(engine: &SearchEngine, args: &StatsArgs, cli_args: &SchiltronArgs) -> Result<()> {
    output_result(
        "Index statistics",
        &StatsReport {
            corpus: args.corpus.to_string_lossy().to_string(),
            stats: engine.index().stats(),
        },
        cli_args,
    )
}

/// Answer queries read from standard input until end of input.
fn run_repl(engine: &SearchEngine, cli_args: &SchiltronArgs) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && cli_args.verbosity() > 0;

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        output_result("Search completed", &engine.search(query), cli_args)?;
    }

    Ok(())
}
