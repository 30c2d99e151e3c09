//! Shared application state for axum handlers.

use std::sync::Arc;

use quickstart_app::ports::ItemCatalog;
use quickstart_app::services::item_service::ItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the catalog itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Catalog read service.
    pub item_service: Arc<ItemService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
        }
    }
}

impl<C> AppState<C>
where
    C: ItemCatalog + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(item_service: ItemService<C>) -> Self {
        Self {
            item_service: Arc::new(item_service),
        }
    }
}
