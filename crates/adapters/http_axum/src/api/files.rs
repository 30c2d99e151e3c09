//! JSON handlers for file paths.

use axum::Json;
use axum::response::{IntoResponse, Response};

use quickstart_app::documents::FileInfo;

use crate::extract::ValidPath;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<FileInfo>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /files/*file_path` — the capture runs to the end of the URL, `/`
/// separators included.
pub async fn get(ValidPath(file_path): ValidPath<String>) -> GetResponse {
    GetResponse::Ok(Json(FileInfo { file_path }))
}

/// `GET /files/` — the empty path, which a wildcard capture never matches.
pub async fn get_root() -> GetResponse {
    GetResponse::Ok(Json(FileInfo {
        file_path: String::new(),
    }))
}
