//! Welcome endpoint.

use axum::Json;
use axum::response::{IntoResponse, Response};

use quickstart_app::documents::Greeting;

/// Possible responses from the root endpoint.
pub enum GetResponse {
    Ok(Json<Greeting>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /`
pub async fn get() -> GetResponse {
    GetResponse::Ok(Json(Greeting::default()))
}
