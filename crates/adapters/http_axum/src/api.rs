//! JSON API handler modules.

pub mod files;
pub mod items;
pub mod models;
pub mod root;

use axum::Router;
use axum::routing::{get, post};

use quickstart_app::ports::ItemCatalog;

use crate::state::AppState;

/// Build the API router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: ItemCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root::get))
        // Models
        .route("/models/{model_name}", get(models::get))
        // Files
        .route("/files/", get(files::get_root))
        .route("/files/{*file_path}", get(files::get))
        // Items
        .route("/items/", get(items::list::<C>))
        .route("/items/{item_id}", get(items::get))
        .route("/items_query/{item_id}", get(items::details))
        .route("/create_items/{item_id}", post(items::create))
}
