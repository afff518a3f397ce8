//! JSON graph snapshot: a concrete host object model for the search engine.
//!
//! A snapshot names a root node and a map of nodes. Each node lists static
//! edges (optionally leading to another node) and keyed collections. Node
//! indices are built only when a query reaches the node, exactly like a live
//! object model would expose them.
//!
//! ```json
//! {
//!   "root": "root",
//!   "nodes": {
//!     "root": {
//!       "items": [ { "name": "foo", "url": "job/foo", "aliases": ["f"], "child": "foo" } ]
//!     },
//!     "foo": {
//!       "collections": [ {
//!         "url_prefix": "builds",
//!         "entries": [ { "key": "3", "name": "#3 nightly", "url": "3" } ]
//!       } ]
//!     }
//!   }
//! }
//! ```
//!
//! An edge's `aliases` are extra names for the same url and child. A
//! collection entry is found by `key` and suggested by `name` (falling back
//! to `key`); `display_name` is accepted as a synonym of `name`. A
//! collection's `url_prefix` is joined in front of every relative entry url.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SearchError};
use crate::index::{
    empty, CaseSensitivity, CollectionSearchIndex, KeyedCollection, Members, SearchIndexBuilder,
    SearchItem, Searchable, SearchableModel, SharedIndex,
};

// ─── Snapshot document ──────────────────────────────────────────────

/// The on-disk document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphSnapshot {
    pub root: String,
    pub nodes: HashMap<String, NodeSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NodeSpec {
    #[serde(default)]
    pub items: Vec<EdgeSpec>,
    #[serde(default)]
    pub collections: Vec<CollectionSpec>,
    /// Fold case when matching this node's edges.
    #[serde(default)]
    pub case_insensitive: bool,
}

/// A static edge. `aliases` register extra names for the same url and child.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EdgeSpec {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub child: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CollectionSpec {
    #[serde(default)]
    pub url_prefix: Option<String>,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

impl CollectionSpec {
    /// Url of `entry` with the collection prefix applied. Absolute entry urls
    /// are kept as they are.
    pub fn entry_url(&self, entry: &EntrySpec) -> String {
        match self.url_prefix.as_deref().map(|p| p.trim_end_matches('/')) {
            Some(prefix) if !prefix.is_empty() && !entry.url.starts_with('/') => {
                format!("{}/{}", prefix, entry.url)
            }
            _ => entry.url.clone(),
        }
    }
}

/// A collection member: found by `key`, suggested by `name`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EntrySpec {
    pub key: String,
    pub url: String,
    #[serde(default, alias = "display_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub child: Option<String>,
}

/// Counts reported by `tokenpath check`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub collection_entries: usize,
}

impl GraphSnapshot {
    /// Parse and validate a snapshot.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let start = Instant::now();
        let json = std::fs::read_to_string(path).map_err(|e| SearchError::GraphLoad {
            path: path_str.clone(),
            message: format!("cannot read file: {}", e),
        })?;
        let snapshot = match Self::from_json_str(&json) {
            Ok(snapshot) => snapshot,
            Err(SearchError::Json(e)) => {
                return Err(SearchError::GraphLoad {
                    path: path_str,
                    message: format!("invalid JSON: {}", e),
                });
            }
            Err(e) => return Err(e),
        };
        info!(
            path = %path_str,
            nodes = snapshot.nodes.len(),
            elapsed_ms = format_args!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
            "Graph snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Root must exist and every `child` must name a defined node.
    pub fn validate(&self) -> Result<()> {
        if !self.nodes.contains_key(&self.root) {
            return Err(SearchError::MissingRoot(self.root.clone()));
        }
        for (id, node) in &self.nodes {
            let edge_children = node.items.iter().filter_map(|e| e.child.as_ref());
            let entry_children = node
                .collections
                .iter()
                .flat_map(|c| c.entries.iter())
                .filter_map(|e| e.child.as_ref());
            for child in edge_children.chain(entry_children) {
                if !self.nodes.contains_key(child) {
                    return Err(SearchError::UnknownNode {
                        node: child.clone(),
                        referenced_from: id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.nodes.len(),
            edges: self
                .nodes
                .values()
                .map(|n| n.items.iter().map(|e| 1 + e.aliases.len()).sum::<usize>())
                .sum(),
            collection_entries: self
                .nodes
                .values()
                .flat_map(|n| n.collections.iter())
                .map(|c| c.entries.len())
                .sum(),
        }
    }
}

// ─── Live graph ─────────────────────────────────────────────────────

/// A validated snapshot ready to be searched.
#[derive(Clone)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

struct GraphInner {
    snapshot: GraphSnapshot,
    /// Forces case folding on every node.
    ignore_case: bool,
}

impl Graph {
    pub fn new(snapshot: GraphSnapshot, ignore_case: bool) -> Self {
        Self {
            inner: Arc::new(GraphInner { snapshot, ignore_case }),
        }
    }

    pub fn snapshot(&self) -> &GraphSnapshot {
        &self.inner.snapshot
    }

    /// Index of the root node.
    pub fn root_index(&self) -> SharedIndex {
        self.node(&self.inner.snapshot.root).search_index()
    }

    fn node(&self, id: &str) -> NodeRef {
        NodeRef {
            graph: Arc::clone(&self.inner),
            id: id.to_string(),
        }
    }
}

/// A node of the graph; its index is assembled when requested.
struct NodeRef {
    graph: Arc<GraphInner>,
    id: String,
}

impl GraphInner {
    fn case_for(&self, node: &NodeSpec) -> CaseSensitivity {
        CaseSensitivity::from_ignore_case(self.ignore_case || node.case_insensitive)
    }
}

impl Searchable for NodeRef {
    fn search_index(&self) -> SharedIndex {
        // validate() guarantees referenced nodes exist
        let Some(node) = self.graph.snapshot.nodes.get(&self.id) else {
            return empty();
        };

        let mut builder = SearchIndexBuilder::new();
        builder.case_insensitive(self.graph.case_for(node) == CaseSensitivity::Insensitive);
        for edge in &node.items {
            let mut names = Vec::with_capacity(1 + edge.aliases.len());
            names.push(edge.name.as_str());
            names.extend(edge.aliases.iter().map(String::as_str));
            match &edge.child {
                Some(child) => {
                    let target: Arc<dyn Searchable> = Arc::new(NodeRef {
                        graph: Arc::clone(&self.graph),
                        id: child.clone(),
                    });
                    builder.add_child_names(&edge.url, target, &names);
                }
                None => {
                    builder.add_names(&edge.url, &names);
                }
            }
        }
        for (position, _) in node.collections.iter().enumerate() {
            builder.add_index(Arc::new(CollectionSearchIndex::new(EntryCollection {
                graph: Arc::clone(&self.graph),
                node: self.id.clone(),
                position,
            })));
        }
        builder.make()
    }
}

/// One `collections[position]` of a node, seen as a keyed collection.
struct EntryCollection {
    graph: Arc<GraphInner>,
    node: String,
    position: usize,
}

impl EntryCollection {
    fn spec(&self) -> Option<&CollectionSpec> {
        self.graph
            .snapshot
            .nodes
            .get(&self.node)
            .and_then(|n| n.collections.get(self.position))
    }

    fn entry(&self, collection: &CollectionSpec, spec: &EntrySpec) -> Arc<Entry> {
        Arc::new(Entry {
            graph: Arc::clone(&self.graph),
            url: collection.entry_url(spec),
            spec: spec.clone(),
        })
    }
}

impl KeyedCollection for EntryCollection {
    type Entry = Entry;

    fn get(&self, key: &str) -> Result<Option<SearchItem>> {
        let case = self.case_sensitivity();
        Ok(self.spec().and_then(|c| {
            c.entries
                .iter()
                .find(|e| case.equals(&e.key, key))
                .map(|e| SearchItem::from_model(self.entry(c, e)))
        }))
    }

    fn all(&self) -> Result<Members<Entry>> {
        Ok(self
            .spec()
            .map(|c| c.entries.iter().map(|e| Some(self.entry(c, e))).collect()))
    }

    fn case_sensitivity(&self) -> CaseSensitivity {
        match self.graph.snapshot.nodes.get(&self.node) {
            Some(node) => self.graph.case_for(node),
            None => CaseSensitivity::Sensitive,
        }
    }
}

/// A collection member.
struct Entry {
    graph: Arc<GraphInner>,
    /// Entry url with the collection prefix applied.
    url: String,
    spec: EntrySpec,
}

impl Searchable for Entry {
    fn search_index(&self) -> SharedIndex {
        match &self.spec.child {
            Some(child) => NodeRef {
                graph: Arc::clone(&self.graph),
                id: child.clone(),
            }
            .search_index(),
            None => empty(),
        }
    }
}

impl SearchableModel for Entry {
    fn search_name(&self) -> String {
        self.spec.key.clone()
    }

    fn search_url(&self) -> String {
        self.url.clone()
    }

    fn display_name(&self) -> String {
        self.spec.name.clone().unwrap_or_else(|| self.spec.key.clone())
    }
}
