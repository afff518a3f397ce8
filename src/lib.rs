//! # tokenpath: token-path search over lazily discovered object graphs
//!
//! A query such as `"foo bar"` is read as a path: the first token names an
//! edge leaving the root index, the second an edge leaving the node that edge
//! leads to, and so on. Each node exposes its own [`index::SearchIndex`] only
//! when a query actually reaches it, so nothing is indexed up front.
//!
//! ## Library usage
//!
//! ```
//! use tokenpath::index::SearchIndexBuilder;
//! use tokenpath::search::Search;
//!
//! let mut builder = SearchIndexBuilder::new();
//! builder.add_named("job/foo", "foo");
//! let search = Search::new(builder.make());
//!
//! let hit = search.find("foo").unwrap().unwrap();
//! assert_eq!(hit.url(), "/job/foo");
//! assert_eq!(hit.path(), "foo");
//! ```
//!
//! The `tokenpath` binary runs the same engine over a JSON graph snapshot
//! (see [`graph`]).

pub mod error;
pub mod graph;
pub mod index;
pub mod search;

pub use error::{Result, SearchError};
pub use index::{SearchIndex, SearchItem, Searchable, SharedIndex};
pub use search::{find, suggest, Resolution, Search, SuggestedItem};

/// Split a raw query into tokens, one per hop.
///
/// Runs of Unicode whitespace are a single delimiter; leading and trailing
/// whitespace is ignored. A blank query gives no tokens.
///
/// # Examples
///
/// ```
/// use tokenpath::tokenize_query;
///
/// assert_eq!(tokenize_query("  foo \t bar "), vec!["foo", "bar"]);
/// assert!(tokenize_query("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize_query(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// The query as suggestions are ranked against: its tokens joined by single
/// spaces.
///
/// ```
/// use tokenpath::normalize_query;
///
/// assert_eq!(normalize_query("\t foo   bar \n"), "foo bar");
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> String {
    tokenize_query(query).join(" ")
}


// ─── Property-based tests (proptest) ─────────────────────────────────
