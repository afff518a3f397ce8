//! Composition of two indices into one.

use std::sync::Arc;

use crate::error::Result;

use super::{empty, SearchIndex, SearchItem, SharedIndex};

/// Concatenates the results of two indices, `lhs` first.
pub struct UnionSearchIndex {
    lhs: SharedIndex,
    rhs: SharedIndex,
}

impl UnionSearchIndex {
    pub fn new(lhs: SharedIndex, rhs: SharedIndex) -> Self {
        Self { lhs, rhs }
    }

    /// Fold any number of indices into a right-leaning union tree.
    ///
    /// `None` and empty indices are dropped rather than wrapped: no real input
    /// gives back the shared empty index, and a single real input is returned
    /// as the very same `Arc`.
    pub fn combine<I>(indices: I) -> SharedIndex
    where
        I: IntoIterator<Item = Option<SharedIndex>>,
    {
        let real: Vec<SharedIndex> = indices
            .into_iter()
            .flatten()
            .filter(|index| !index.is_empty_index())
            .collect();

        real.into_iter()
            .rev()
            .reduce(|rhs, lhs| Arc::new(UnionSearchIndex::new(lhs, rhs)) as SharedIndex)
            .unwrap_or_else(empty)
    }
}

impl SearchIndex for UnionSearchIndex {
    fn find(&self, token: &str) -> Result<Vec<SearchItem>> {
        let mut items = self.lhs.find(token)?;
        items.extend(self.rhs.find(token)?);
        Ok(items)
    }

    fn suggest(&self, token: &str) -> Result<Vec<SearchItem>> {
        let mut items = self.lhs.suggest(token)?;
        items.extend(self.rhs.suggest(token)?);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::FixedSet;

    fn set(names: &[&str]) -> SharedIndex {
        Arc::new(FixedSet::from_iter(
            names.iter().map(|n| SearchItem::leaf(*n, *n)),
        ))
    }

    fn names(items: Vec<SearchItem>) -> Vec<String> {
        items.into_iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_union_concatenates_lhs_first() {
        let union = UnionSearchIndex::new(set(&["ab", "abc"]), set(&["abd", "ab"]));
        assert_eq!(names(union.find("ab").unwrap()), vec!["ab", "ab"]);
        assert_eq!(names(union.suggest("ab").unwrap()), vec!["ab", "abc", "abd", "ab"]);
    }

    #[test]
    fn test_combine_nothing_is_empty() {
        let combined = UnionSearchIndex::combine(Vec::new());
        assert!(Arc::ptr_eq(&combined, &empty()));
    }

    #[test]
    fn test_combine_all_empty_is_empty() {
        let combined = UnionSearchIndex::combine([None, Some(empty()), Some(empty()), None]);
        assert!(Arc::ptr_eq(&combined, &empty()));
    }

    #[test]
    fn test_combine_single_returns_same_index() {
        let only = set(&["x"]);
        let combined = UnionSearchIndex::combine([Some(empty()), Some(Arc::clone(&only)), None]);
        assert!(Arc::ptr_eq(&combined, &only));
    }

    #[test]
    fn test_combine_preserves_argument_order() {
        let combined = UnionSearchIndex::combine([
            Some(set(&["a1"])),
            None,
            Some(set(&["a2"])),
            Some(empty()),
            Some(set(&["a3"])),
        ]);
        assert_eq!(names(combined.suggest("a").unwrap()), vec!["a1", "a2", "a3"]);
    }
}
