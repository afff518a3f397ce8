//! Index adapter over a live, keyed collection of model objects.

use std::sync::Arc;

use crate::error::Result;

use super::{CaseSensitivity, SearchIndex, SearchItem, SearchableModel};

/// What `KeyedCollection::all` returns: `None` means "no items"; `None`
/// entries inside the list are holes and are skipped.
pub type Members<T> = Option<Vec<Option<Arc<T>>>>;

/// A dynamic collection that can be searched, such as all builds of a job.
///
/// Implementations decide their own thread-safety; the index adds none.
pub trait KeyedCollection: Send + Sync {
    type Entry: SearchableModel + 'static;

    /// Exact lookup by key.
    fn get(&self, key: &str) -> Result<Option<SearchItem>>;

    /// Current members of the collection.
    fn all(&self) -> Result<Members<Self::Entry>>;

    /// Name `suggest` matches against.
    fn name_of(&self, entry: &Self::Entry) -> String {
        entry.display_name()
    }

    fn case_sensitivity(&self) -> CaseSensitivity {
        CaseSensitivity::Sensitive
    }
}

/// `SearchIndex` over a `KeyedCollection`: `find` is a keyed lookup, `suggest`
/// a linear scan over all members.
#[derive(Debug, Clone)]
pub struct CollectionSearchIndex<C> {
    source: C,
}

impl<C: KeyedCollection> CollectionSearchIndex<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }
}

impl<C: KeyedCollection> SearchIndex for CollectionSearchIndex<C> {
    fn find(&self, token: &str) -> Result<Vec<SearchItem>> {
        Ok(self.source.get(token)?.into_iter().collect())
    }

    fn suggest(&self, token: &str) -> Result<Vec<SearchItem>> {
        let Some(members) = self.source.all()? else {
            return Ok(Vec::new());
        };
        let case = self.source.case_sensitivity();
        Ok(members
            .into_iter()
            .flatten()
            .filter(|entry| case.contains(&self.source.name_of(entry), token))
            .map(SearchItem::from_model)
            .collect())
    }
}
