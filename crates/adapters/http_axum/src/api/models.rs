//! JSON handlers for model names.

use axum::Json;
use axum::response::{IntoResponse, Response};

use quickstart_app::documents::ModelInfo;
use quickstart_domain::model_name::ModelName;

use crate::extract::ValidPath;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ModelInfo>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /models/:model_name`
pub async fn get(ValidPath(model): ValidPath<ModelName>) -> GetResponse {
    GetResponse::Ok(Json(ModelInfo::from(model)))
}
