//! Result paths: a matched edge plus the chain of edges that led to it.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::index::SearchItem;

/// One node in the tree of matched paths.
///
/// Cloning is cheap: siblings produced by the same frontier item share their
/// parent chain. `path` and `url` are computed on first use and cached; the
/// chain never changes, so the cache never goes stale.
#[derive(Clone)]
pub struct SuggestedItem {
    node: Arc<Node>,
}

struct Node {
    item: SearchItem,
    parent: Option<SuggestedItem>,
    path: OnceLock<String>,
    url: OnceLock<String>,
}

impl SuggestedItem {
    /// A path of length one.
    pub fn root(item: SearchItem) -> Self {
        Self::with_parent(item, None)
    }

    /// Extend this path by one edge.
    pub fn child(&self, item: SearchItem) -> Self {
        Self::with_parent(item, Some(self.clone()))
    }

    fn with_parent(item: SearchItem, parent: Option<SuggestedItem>) -> Self {
        Self {
            node: Arc::new(Node {
                item,
                parent,
                path: OnceLock::new(),
                url: OnceLock::new(),
            }),
        }
    }

    pub fn item(&self) -> &SearchItem {
        &self.node.item
    }

    pub fn parent(&self) -> Option<&SuggestedItem> {
        self.node.parent.as_ref()
    }

    /// Number of edges from the search root to this node.
    pub fn depth(&self) -> usize {
        1 + self.parent().map_or(0, SuggestedItem::depth)
    }

    /// Space-joined names from the root to this node.
    pub fn path(&self) -> &str {
        self.node.path.get_or_init(|| match self.parent() {
            Some(parent) => format!("{} {}", parent.path(), self.item().name()),
            None => self.item().name().to_string(),
        })
    }

    /// Url relative to the search root.
    ///
    /// Segments are joined with `/`; a segment starting with `/` discards
    /// everything accumulated before it. The result always starts with `/`
    /// and only ends with `/` when it is exactly `/`.
    pub fn url(&self) -> &str {
        self.node.url.get_or_init(|| {
            let segment = self.item().url();
            let mut url = String::new();
            if !segment.starts_with('/') {
                if let Some(parent) = self.parent() {
                    url.push_str(parent.url());
                }
                if !url.ends_with('/') {
                    url.push('/');
                }
            }
            url.push_str(segment);

            let trimmed = url.trim_end_matches('/').len().max(1);
            url.truncate(trimmed);
            url
        })
    }
}

impl fmt::Debug for SuggestedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestedItem")
            .field("path", &self.path())
            .field("url", &self.url())
            .finish()
    }
}

impl Serialize for SuggestedItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SuggestedItem", 2)?;
        state.serialize_field("path", self.path())?;
        state.serialize_field("url", self.url())?;
        state.end()
    }
}
