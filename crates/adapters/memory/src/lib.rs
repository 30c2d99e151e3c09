//! # quickstart-adapter-memory
//!
//! In-memory [`ItemCatalog`] implementation.
//!
//! ## Provided rows
//!
//! | Position | `item_name` |
//! |----------|-------------|
//! | 0 | `Foo` |
//! | 1 | `Bar` |
//! | 2 | `Baz` |
//!
//! The rows are fixed at construction and never mutated, so the catalog can
//! be shared freely between requests.
//!
//! ## Dependency rule
//!
//! Depends on `quickstart-app` (port traits) and `quickstart-domain` only.

use std::future::Future;

use quickstart_app::ports::ItemCatalog;
use quickstart_domain::catalog::{CatalogEntry, Page};

/// Catalog backed by a fixed vector of rows.
#[derive(Debug, Clone)]
pub struct InMemoryItemCatalog {
    rows: Vec<CatalogEntry>,
}

impl Default for InMemoryItemCatalog {
    fn default() -> Self {
        Self::new(["Foo", "Bar", "Baz"].map(CatalogEntry::new).to_vec())
    }
}

impl InMemoryItemCatalog {
    /// Create a catalog serving exactly `rows`, in order.
    #[must_use]
    pub fn new(rows: Vec<CatalogEntry>) -> Self {
        Self { rows }
    }

    /// Number of rows held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ItemCatalog for InMemoryItemCatalog {
    fn list(&self, page: Page) -> impl Future<Output = Vec<CatalogEntry>> + Send {
        let rows = page.apply(&self.rows).to_vec();
        async { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_three_demo_rows() {
        let catalog = InMemoryItemCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn should_list_rows_in_seed_order() {
        let rows = InMemoryItemCatalog::default().list(Page::default()).await;
        let names: Vec<_> = rows.iter().map(|r| r.item_name.as_str()).collect();
        assert_eq!(names, vec!["Foo", "Bar", "Baz"]);
    }

    #[tokio::test]
    async fn should_list_only_requested_window() {
        let rows = InMemoryItemCatalog::default()
            .list(Page { skip: 1, limit: 1 })
            .await;
        assert_eq!(rows, vec![CatalogEntry::new("Bar")]);
    }

    #[tokio::test]
    async fn should_serve_custom_rows() {
        let catalog = InMemoryItemCatalog::new(vec![CatalogEntry::new("Qux")]);
        let rows = catalog.list(Page::default()).await;
        assert_eq!(rows[0].item_name, "Qux");
    }
}
