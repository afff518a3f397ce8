//! CLI layer: argument parsing, command dispatch, and subcommand implementations.

pub mod args;

pub use args::*;

use std::io::{self, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tokenpath::graph::{Graph, GraphSnapshot};
use tokenpath::search::{edit_distance, Resolution, Search};
use tokenpath::{normalize_query, SearchError};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Token-path search: walk a graph of named, url-bearing edges one query token at a time
#[derive(Parser, Debug)]
#[command(name = "tokenpath", version, about, after_help = "\
Run 'tokenpath <COMMAND> --help' for detailed options and examples.\n\
Common options: -g <FILE> (graph snapshot), -i (ignore case), --json")]
pub(crate) struct Cli {
    /// Log level: error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Case-insensitive matching on every node (overrides per-node settings)
    #[arg(short = 'i', long, global = true)]
    pub ignore_case: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Find the first path whose names match the query tokens exactly
    Find(FindArgs),

    /// Suggest paths whose names contain the query tokens, closest first
    Suggest(SuggestArgs),

    /// Exact match, or the single suggestion if there is exactly one
    Resolve(ResolveArgs),

    /// Validate a graph snapshot and print its size
    Check(CheckArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    let result = {
        let mut stdout = io::stdout().lock();
        let result = match cli.command {
            Commands::Find(args) => cmd_find(&args, cli.ignore_case, &mut stdout),
            Commands::Suggest(args) => cmd_suggest(&args, cli.ignore_case, &mut stdout),
            Commands::Resolve(args) => cmd_resolve(&args, cli.ignore_case, &mut stdout),
            Commands::Check(args) => cmd_check(&args, &mut stdout),
        };
        result.and_then(|ok| {
            stdout.flush()?;
            Ok(ok)
        })
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(level: &str, json: bool) {
    let level = match level {
        "error" | "warn" | "info" | "debug" | "trace" => level,
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ─── Shared helpers ─────────────────────────────────────────────────

/// Load the snapshot and root a `Search` at it. Returns the search and the
/// node count for the summary line.
fn open_search(args: &GraphArgs, ignore_case: bool) -> Result<(Search, usize), SearchError> {
    let snapshot = GraphSnapshot::load(&args.graph)?;
    let nodes = snapshot.nodes.len();
    let graph = Graph::new(snapshot, ignore_case);
    Ok((Search::new(graph.root_index()), nodes))
}

fn write_json<T: serde::Serialize>(out: &mut dyn Write, value: &T) -> Result<(), SearchError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn warn_blank(query: &str) {
    if normalize_query(query).is_empty() {
        warn!("Query is blank; nothing to search for");
    }
}

// ─── Commands ───────────────────────────────────────────────────────

pub(crate) fn cmd_find(
    args: &FindArgs,
    ignore_case: bool,
    out: &mut dyn Write,
) -> Result<bool, SearchError> {
    let start = Instant::now();
    let (search, nodes) = open_search(&args.graph, ignore_case)?;
    let load_elapsed = start.elapsed();
    warn_blank(&args.query);

    let search_start = Instant::now();
    let found = search.find(&args.query)?;
    let search_elapsed = search_start.elapsed();

    match &found {
        Some(item) if args.json => write_json(out, item)?,
        Some(item) => writeln!(out, "{}\t{}", item.path(), item.url())?,
        None => eprintln!("No match for '{}'", args.query),
    }

    debug!(nodes, query = %args.query, matched = found.is_some(), "find finished");
    eprintln!("Graph load: {:.3}s | Search: {:.6}s",
        load_elapsed.as_secs_f64(), search_elapsed.as_secs_f64());
    Ok(found.is_some())
}

pub(crate) fn cmd_suggest(
    args: &SuggestArgs,
    ignore_case: bool,
    out: &mut dyn Write,
) -> Result<bool, SearchError> {
    let start = Instant::now();
    let (search, nodes) = open_search(&args.graph, ignore_case)?;
    let load_elapsed = start.elapsed();
    warn_blank(&args.query);

    let search_start = Instant::now();
    let results = search.suggest(&args.query)?;
    let search_elapsed = search_start.elapsed();

    let total = results.len();
    let shown = if args.max_results > 0 {
        &results[..total.min(args.max_results)]
    } else {
        &results[..]
    };

    if args.json {
        write_json(out, &shown)?;
    } else {
        let normalized = normalize_query(&args.query);
        for item in shown {
            let distance = edit_distance(item.path(), &normalized);
            writeln!(out, "[{}] {}\t{}", distance, item.path(), item.url())?;
        }
    }

    eprintln!("\n{} suggestions for '{}' (showing {}, graph: {} nodes)",
        total, args.query, shown.len(), nodes);
    eprintln!("Graph load: {:.3}s | Search+Rank: {:.6}s",
        load_elapsed.as_secs_f64(), search_elapsed.as_secs_f64());
    Ok(total > 0)
}

pub(crate) fn cmd_resolve(
    args: &ResolveArgs,
    ignore_case: bool,
    out: &mut dyn Write,
) -> Result<bool, SearchError> {
    let (search, _) = open_search(&args.graph, ignore_case)?;
    warn_blank(&args.query);
    let resolution = search.resolve(&args.query)?;

    if args.json {
        write_json(out, &resolution)?;
    } else {
        match &resolution {
            Resolution::Exact(item) => writeln!(out, "exact\t{}\t{}", item.path(), item.url())?,
            Resolution::Suggested(item) => {
                writeln!(out, "suggested\t{}\t{}", item.path(), item.url())?
            }
            Resolution::Ambiguous(items) => {
                writeln!(out, "ambiguous\t{} candidates", items.len())?;
                for item in items {
                    writeln!(out, "  {}\t{}", item.path(), item.url())?;
                }
            }
            Resolution::NoMatch => writeln!(out, "no match")?,
        }
    }
    Ok(!matches!(resolution, Resolution::NoMatch))
}

pub(crate) fn cmd_check(args: &CheckArgs, out: &mut dyn Write) -> Result<bool, SearchError> {
    let snapshot = GraphSnapshot::load(&args.graph)?;
    let summary = snapshot.summary();
    writeln!(out, "OK: root '{}': {} nodes, {} edges, {} collection entries",
        snapshot.root, summary.nodes, summary.edges, summary.collection_entries)?;
    Ok(true)
}
