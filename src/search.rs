//! Traversal driver: turns a query string into matched paths.
//!
//! A query is split on whitespace; each token is one hop. The first token is
//! matched against the root index, every further token against the child
//! indices of the paths that survived the previous hop. Child indices are
//! resolved only for surviving paths, so dead branches cost nothing.
//!
//! `find` matches tokens exactly and returns the first full path. `suggest`
//! matches loosely and ranks every full path by edit distance between its
//! space-joined names and the query's space-joined tokens.
//!
//! Errors raised by index implementations abort the query and are returned
//! unchanged.

pub mod distance;
mod suggested;

pub use distance::edit_distance;
pub use suggested::SuggestedItem;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::index::{SearchIndex, SearchItem, SharedIndex};
use crate::{normalize_query, tokenize_query};

/// How a single hop matches a token against an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// `SearchIndex::find`
    Exact,
    /// `SearchIndex::suggest`
    Loose,
}

impl MatchMode {
    pub fn query(self, index: &dyn SearchIndex, token: &str) -> Result<Vec<SearchItem>> {
        match self {
            MatchMode::Exact => index.find(token),
            MatchMode::Loose => index.suggest(token),
        }
    }
}

/// Breadth-first expansion, one hop per token. Returns the final frontier.
fn traverse(index: &dyn SearchIndex, query: &str, mode: MatchMode) -> Result<Vec<SuggestedItem>> {
    let tokens = tokenize_query(query);
    let Some((first, rest)) = tokens.split_first() else {
        return Ok(Vec::new());
    };

    let mut frontier: Vec<SuggestedItem> = mode
        .query(index, first)?
        .into_iter()
        .map(SuggestedItem::root)
        .collect();
    debug!(hop = 0, token = %first, frontier = frontier.len(), ?mode, "search hop");

    for (hop, token) in rest.iter().enumerate() {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for parent in &frontier {
            let child_index = parent.item().search_index();
            for item in mode.query(child_index.as_ref(), token)? {
                next.push(parent.child(item));
            }
        }
        frontier = next;
        debug!(hop = hop + 1, token = %token, frontier = frontier.len(), ?mode, "search hop");
    }

    Ok(frontier)
}

/// First path whose every edge name equals the corresponding query token.
pub fn find(index: &dyn SearchIndex, query: &str) -> Result<Option<SuggestedItem>> {
    Ok(traverse(index, query, MatchMode::Exact)?.into_iter().next())
}

/// Every loosely matching path, closest to `query` first.
///
/// Distance is measured between the whole space-joined path and the whole
/// query with its whitespace collapsed, so a one-hop match can outrank a
/// multi-hop one for a multi-word query. Equal distances keep traversal order.
/// Nothing is truncated.
pub fn suggest(index: &dyn SearchIndex, query: &str) -> Result<Vec<SuggestedItem>> {
    let normalized = normalize_query(query);
    let mut ranked: Vec<(usize, SuggestedItem)> = traverse(index, query, MatchMode::Loose)?
        .into_iter()
        .map(|item| (edit_distance(item.path(), &normalized), item))
        .collect();
    // sort_by_key is stable
    ranked.sort_by_key(|(distance, _)| *distance);
    Ok(ranked.into_iter().map(|(_, item)| item).collect())
}

/// Outcome of turning a query into a single destination.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Resolution {
    /// Every token matched an edge name exactly.
    Exact(SuggestedItem),
    /// No exact path, but exactly one loose one.
    Suggested(SuggestedItem),
    /// Several loose candidates, ranked.
    Ambiguous(Vec<SuggestedItem>),
    NoMatch,
}

impl Resolution {
    /// The single destination, if the query resolved to one.
    pub fn destination(&self) -> Option<&SuggestedItem> {
        match self {
            Resolution::Exact(item) | Resolution::Suggested(item) => Some(item),
            Resolution::Ambiguous(_) | Resolution::NoMatch => None,
        }
    }
}

/// A search rooted at one index.
#[derive(Clone)]
pub struct Search {
    root: SharedIndex,
}

impl Search {
    pub fn new(root: SharedIndex) -> Self {
        Self { root }
    }

    pub fn find(&self, query: &str) -> Result<Option<SuggestedItem>> {
        find(self.root.as_ref(), query)
    }

    pub fn suggest(&self, query: &str) -> Result<Vec<SuggestedItem>> {
        suggest(self.root.as_ref(), query)
    }

    /// Exact match first; failing that, fall back to suggestions and accept a
    /// lone candidate.
    pub fn resolve(&self, query: &str) -> Result<Resolution> {
        if let Some(item) = self.find(query)? {
            return Ok(Resolution::Exact(item));
        }
        let mut candidates = self.suggest(query)?;
        Ok(match candidates.len() {
            0 => Resolution::NoMatch,
            1 => Resolution::Suggested(candidates.remove(0)),
            _ => Resolution::Ambiguous(candidates),
        })
    }
}

#[cfg(test)]
#[path = "search/search_tests.rs"]
mod tests;
