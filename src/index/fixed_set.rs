//! Index over a static, pre-known set of items.

use crate::error::Result;

use super::{CaseSensitivity, SearchIndex, SearchItem};

/// A `SearchIndex` backed by a fixed collection of items.
///
/// `find` compares names for equality, `suggest` for substring containment.
#[derive(Debug, Clone, Default)]
pub struct FixedSet {
    items: Vec<SearchItem>,
    case: CaseSensitivity,
}

impl FixedSet {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self {
            items,
            case: CaseSensitivity::Sensitive,
        }
    }

    /// Fold case in both `find` and `suggest`.
    #[must_use]
    pub fn case_insensitive(mut self, ignore_case: bool) -> Self {
        self.case = CaseSensitivity::from_ignore_case(ignore_case);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<SearchItem> for FixedSet {
    fn from_iter<T: IntoIterator<Item = SearchItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SearchIndex for FixedSet {
    fn find(&self, token: &str) -> Result<Vec<SearchItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| self.case.equals(item.name(), token))
            .cloned()
            .collect())
    }

    fn suggest(&self, token: &str) -> Result<Vec<SearchItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| self.case.contains(item.name(), token))
            .cloned()
            .collect())
    }
}
