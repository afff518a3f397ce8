//! Search index contracts: edges (`SearchItem`), nodes (`SearchIndex`), and the
//! host-facing `Searchable` capability, plus the concrete index implementations.
//!
//! A `SearchIndex` answers "which edges leaving this node match this token".
//! Every edge carries a handle to the index of the node it leads to; that
//! handle is resolved only when a traversal actually walks the edge.
//!
//! The graph reachable through these handles is assumed to be acyclic. The
//! engine does not detect cycles: a query only consumes a finite number of
//! tokens, so a cycle cannot hang a query, but it does make paths repeat.

mod builder;
mod collection;
mod fixed_set;
mod union;

pub use builder::SearchIndexBuilder;
pub use collection::{CollectionSearchIndex, KeyedCollection, Members};
pub use fixed_set::FixedSet;
pub use union::UnionSearchIndex;

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::Result;

/// Shared handle to a search index.
pub type SharedIndex = Arc<dyn SearchIndex>;

// ─── Node contract ──────────────────────────────────────────────────

/// A searchable node: given a token, produce the matching outgoing edges.
///
/// `suggest` must return a superset of `find` for the same token whenever the
/// index uses substring containment as its loose rule.
///
/// Neither method treats "no match" as an error. `Err` is reserved for
/// implementations whose backing data cannot be read; the traversal driver
/// propagates it unchanged.
pub trait SearchIndex: Send + Sync {
    /// Items whose name equals `token`.
    fn find(&self, token: &str) -> Result<Vec<SearchItem>>;

    /// Items whose name loosely matches `token` (substring containment unless
    /// the implementation says otherwise).
    fn suggest(&self, token: &str) -> Result<Vec<SearchItem>>;

    /// True only for the shared empty index.
    fn is_empty_index(&self) -> bool {
        false
    }
}

/// The index with no edges.
struct EmptyIndex;

impl SearchIndex for EmptyIndex {
    fn find(&self, _token: &str) -> Result<Vec<SearchItem>> {
        Ok(Vec::new())
    }

    fn suggest(&self, _token: &str) -> Result<Vec<SearchItem>> {
        Ok(Vec::new())
    }

    fn is_empty_index(&self) -> bool {
        true
    }
}

static EMPTY: LazyLock<SharedIndex> = LazyLock::new(|| Arc::new(EmptyIndex));

/// The process-wide empty index. Every call returns the same allocation.
pub fn empty() -> SharedIndex {
    Arc::clone(&EMPTY)
}

// ─── Host capability ────────────────────────────────────────────────

/// Anything that exposes its own search index.
pub trait Searchable: Send + Sync {
    fn search_index(&self) -> SharedIndex;
}

/// A searchable object that is also an edge target in its parent's index:
/// it knows its own name and url segment.
pub trait SearchableModel: Searchable {
    /// Name matched against query tokens.
    fn search_name(&self) -> String;

    /// Relative url segment for this object.
    fn search_url(&self) -> String;

    /// Human-facing name; collection indices match `suggest` against this.
    fn display_name(&self) -> String {
        self.search_name()
    }
}

// ─── Edge ───────────────────────────────────────────────────────────

/// Where a `SearchItem` leads.
#[derive(Clone, Default)]
pub enum ChildIndex {
    /// Leaf edge.
    #[default]
    Empty,
    /// An index that already exists.
    Index(SharedIndex),
    /// An object whose index is read only when the traversal reaches it.
    Deferred(Arc<dyn Searchable>),
}

impl ChildIndex {
    /// Resolve the handle into an index.
    pub fn resolve(&self) -> SharedIndex {
        match self {
            ChildIndex::Empty => empty(),
            ChildIndex::Index(index) => Arc::clone(index),
            ChildIndex::Deferred(target) => target.search_index(),
        }
    }
}

impl fmt::Debug for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIndex::Empty => f.write_str("Empty"),
            ChildIndex::Index(_) => f.write_str("Index(..)"),
            ChildIndex::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// An edge in the search graph: a name to match, a url segment, and the index
/// to continue searching from.
///
/// Equality compares name and url only.
#[derive(Clone, Debug)]
pub struct SearchItem {
    name: String,
    url: String,
    child: ChildIndex,
}

impl SearchItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>, child: ChildIndex) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            child,
        }
    }

    /// An edge with no children.
    pub fn leaf(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, url, ChildIndex::Empty)
    }

    /// An edge for a model object; its index is resolved lazily.
    pub fn from_model<M: SearchableModel + 'static>(model: Arc<M>) -> Self {
        let name = model.search_name();
        let url = model.search_url();
        Self::new(name, url, ChildIndex::Deferred(model))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn child(&self) -> &ChildIndex {
        &self.child
    }

    /// The index to search from this edge onwards.
    pub fn search_index(&self) -> SharedIndex {
        self.child.resolve()
    }
}

impl PartialEq for SearchItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.url == other.url
    }
}

impl Eq for SearchItem {}

// ─── Matching policy ────────────────────────────────────────────────

/// Whether name comparisons fold case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        }
    }

    /// Exact comparison of a name against a token.
    pub fn equals(self, name: &str, token: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => name == token,
            CaseSensitivity::Insensitive => name.to_lowercase() == token.to_lowercase(),
        }
    }

    /// Substring containment of a token in a name.
    pub fn contains(self, name: &str, token: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => name.contains(token),
            CaseSensitivity::Insensitive => name.to_lowercase().contains(&token.to_lowercase()),
        }
    }
}
