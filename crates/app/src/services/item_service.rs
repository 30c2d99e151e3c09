//! Item service — use-cases for browsing the item catalog.

use quickstart_domain::catalog::{CatalogEntry, Page};

use crate::ports::ItemCatalog;

/// Application service for catalog reads.
pub struct ItemService<C> {
    catalog: C,
}

impl<C: ItemCatalog> ItemService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List the catalog rows inside `page`.
    pub async fn list_items(&self, page: Page) -> Vec<CatalogEntry> {
        let items = self.catalog.list(page).await;
        tracing::debug!(
            skip = page.skip,
            limit = page.limit,
            count = items.len(),
            "listed catalog items"
        );
        items
    }
}
