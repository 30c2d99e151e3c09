//! Catalog — the read-only listing of demo items, and paging over it.

use serde::Serialize;

/// A single catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub item_name: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
        }
    }
}

/// A `skip`/`limit` window over an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

impl Page {
    /// Select the window `[skip, skip + limit)` of `items`, clamped to its
    /// bounds.
    #[must_use]
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = self.skip.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}
