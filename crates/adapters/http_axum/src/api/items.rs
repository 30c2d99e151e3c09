//! JSON handlers for items.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use quickstart_app::documents::{CreatedItem, ItemDetails, ItemSummary};
use quickstart_app::ports::ItemCatalog;
use quickstart_domain::catalog::{CatalogEntry, Page};
use quickstart_domain::item::{Item, ItemId};
use quickstart_domain::param;

use crate::error::{ApiError, Location};
use crate::extract::{JsonBody, QueryParams, ValidPath};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CatalogEntry>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ItemSummary>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the details endpoint.
pub enum DetailsResponse {
    Ok(Json<ItemDetails>),
}

impl IntoResponse for DetailsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<CreatedItem>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /items/` — page through the demo catalog with `skip` and `limit`.
pub async fn list<C>(
    State(state): State<AppState<C>>,
    query: QueryParams,
) -> Result<ListResponse, ApiError>
where
    C: ItemCatalog + Send + Sync + 'static,
{
    let defaults = Page::default();
    let page = Page {
        skip: window_bound(&query, "skip")?.unwrap_or(defaults.skip),
        limit: window_bound(&query, "limit")?.unwrap_or(defaults.limit),
    };
    let items = state.item_service.list_items(page).await;
    Ok(ListResponse::Ok(Json(items)))
}

fn window_bound(query: &QueryParams, key: &str) -> Result<Option<usize>, ApiError> {
    let value = query
        .parse(key, |raw| param::parse_int_ge(raw, 0))
        .map_err(|err| ApiError::validation(Location::Query, err))?;
    Ok(value.map(|v| usize::try_from(v).unwrap_or(usize::MAX)))
}

/// `GET /items/:item_id` — `item_id` must satisfy `1 < item_id <= 1000`;
/// the optional query text is read from `item-query`.
pub async fn get(
    ValidPath(item_id): ValidPath<ItemId>,
    query: QueryParams,
) -> Result<GetResponse, ApiError> {
    Ok(GetResponse::Ok(Json(ItemSummary::new(
        item_id,
        query.text("item-query"),
    ))))
}

/// `GET /items_query/:item_id` — free-form id, optional `q`, and a `short`
/// flag that drops the long description.
pub async fn details(
    ValidPath(item_id): ValidPath<String>,
    query: QueryParams,
) -> Result<DetailsResponse, ApiError> {
    let short = query
        .parse("short", param::parse_bool)
        .map_err(|err| ApiError::invalid_parameter(Location::Query, err))?
        .unwrap_or(false);
    Ok(DetailsResponse::Ok(Json(ItemDetails::new(
        item_id,
        query.text("q"),
        short,
    ))))
}

/// `POST /create_items/:item_id` — echo the body item merged with its id.
pub async fn create(
    ValidPath(item_id): ValidPath<i64>,
    query: QueryParams,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse, ApiError> {
    let item = Item::from_json(&body).map_err(|err| ApiError::new(Location::Body, err))?;
    Ok(CreateResponse::Ok(Json(CreatedItem::new(
        item_id,
        item,
        query.text("q"),
    ))))
}
