//! Catalog port — read access to the demo item listing.

use std::future::Future;

use quickstart_domain::catalog::{CatalogEntry, Page};

/// Read-only source of [`CatalogEntry`] rows, in a stable order.
pub trait ItemCatalog {
    /// Return the rows inside `page`.
    fn list(&self, page: Page) -> impl Future<Output = Vec<CatalogEntry>> + Send;
}
