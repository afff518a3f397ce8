//! Mutable accumulator that freezes into an immutable `SearchIndex`.

use std::sync::Arc;

use super::{empty, ChildIndex, FixedSet, SearchItem, Searchable, SharedIndex, UnionSearchIndex};

/// Collects static edges and sub-indices, then builds one index with `make`.
///
/// Every `add*` takes `&mut self`, so a builder has exactly one writer at a
/// time. The index returned by `make` is independent of the builder.
///
/// ```
/// use tokenpath::index::{SearchIndex, SearchIndexBuilder};
///
/// let mut builder = SearchIndexBuilder::new();
/// builder.add("manage").add_named("job/foo", "foo");
/// let index = builder.make();
/// assert_eq!(index.find("foo").unwrap()[0].url(), "job/foo");
/// ```
#[derive(Default)]
pub struct SearchIndexBuilder {
    items: Vec<SearchItem>,
    indices: Vec<SharedIndex>,
    ignore_case: bool,
}

impl SearchIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `url_and_name` as both the url and the name of a leaf.
    pub fn add(&mut self, url_and_name: &str) -> &mut Self {
        self.add_named(url_and_name, url_and_name)
    }

    pub fn add_named(&mut self, url: &str, name: &str) -> &mut Self {
        self.items.push(SearchItem::leaf(name, url));
        self
    }

    /// One leaf per name, all sharing `url`.
    pub fn add_names<S: AsRef<str>>(&mut self, url: &str, names: &[S]) -> &mut Self {
        for name in names {
            self.add_named(url, name.as_ref());
        }
        self
    }

    pub fn add_item(&mut self, item: SearchItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// An edge into `child`; its index is read only when a query walks the edge.
    pub fn add_child(&mut self, url: &str, child: Arc<dyn Searchable>, name: &str) -> &mut Self {
        self.items
            .push(SearchItem::new(name, url, ChildIndex::Deferred(child)));
        self
    }

    pub fn add_child_names<S: AsRef<str>>(
        &mut self,
        url: &str,
        child: Arc<dyn Searchable>,
        names: &[S],
    ) -> &mut Self {
        for name in names {
            self.add_child(url, Arc::clone(&child), name.as_ref());
        }
        self
    }

    /// Union a whole sub-index into the result.
    pub fn add_index(&mut self, index: SharedIndex) -> &mut Self {
        self.indices.push(index);
        self
    }

    /// Fold case when matching the static items.
    pub fn case_insensitive(&mut self, ignore_case: bool) -> &mut Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Freeze: static items first, then each sub-index in registration order.
    pub fn make(&self) -> SharedIndex {
        let fixed: SharedIndex = if self.items.is_empty() {
            empty()
        } else {
            Arc::new(FixedSet::new(self.items.clone()).case_insensitive(self.ignore_case))
        };

        self.indices
            .iter()
            .filter(|index| !index.is_empty_index())
            .fold(fixed, |acc, index| {
                if acc.is_empty_index() {
                    Arc::clone(index)
                } else {
                    Arc::new(UnionSearchIndex::new(acc, Arc::clone(index)))
                }
            })
    }
}
