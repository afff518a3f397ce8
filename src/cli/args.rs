//! CLI argument structs for all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Where the searchable graph comes from.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON graph snapshot to search
    #[arg(short, long)]
    pub graph: PathBuf,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  Single hop:     tokenpath find foo --graph graph.json
  Two hops:       tokenpath find "foo lastBuild" --graph graph.json
  Any case:       tokenpath find MANAGE --graph graph.json -i
  JSON output:    tokenpath find "foo 3" --graph graph.json --json

Each whitespace-separated token must equal the name of one edge, starting
from the graph's root node. Exits with status 1 when nothing matches.
"#)]
pub struct FindArgs {
    /// Query: one token per hop
    pub query: String,

    #[command(flatten)]
    pub graph: GraphArgs,

    /// Print the match as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  Loose match:    tokenpath suggest fo --graph graph.json
  Top 5 only:     tokenpath suggest "fo ni" --graph graph.json -n 5
  JSON output:    tokenpath suggest fo --graph graph.json --json

Each token only needs to be contained in an edge name. Results are ordered
by edit distance between the full path and the query; ties keep graph order.
"#)]
pub struct SuggestArgs {
    /// Query: one token per hop
    pub query: String,

    #[command(flatten)]
    pub graph: GraphArgs,

    /// Maximum results to print (0 = all)
    #[arg(short = 'n', long, default_value = "0")]
    pub max_results: usize,

    /// Print suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Query: one token per hop
    pub query: String,

    #[command(flatten)]
    pub graph: GraphArgs,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// JSON graph snapshot to validate
    #[arg(short, long)]
    pub graph: PathBuf,
}
