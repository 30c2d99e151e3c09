//! HTTP error response mapping.
//!
//! Every validation failure is answered with `422 Unprocessable Entity` and a
//! body listing each offending field:
//!
//! ```json
//! {"detail":[{"type":"greater_than","loc":["path","item_id"],"msg":"Input should be greater than 1","input":"0","ctx":{"gt":1}}]}
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use quickstart_domain::error::{FieldError, QuickstartError};

/// Where in the request a value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

/// Maps request failures to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// A value was read but failed validation.
    Invalid {
        location: Location,
        error: QuickstartError,
    },
    /// The request could not be read at all (bad encoding, oversized body, …).
    Unreadable { status: StatusCode, message: String },
}

impl ApiError {
    /// Wrap a domain error raised while reading `location`.
    pub fn new(location: Location, error: QuickstartError) -> Self {
        Self::Invalid { location, error }
    }

    /// A parameter failed coercion or enumeration membership.
    pub fn invalid_parameter(location: Location, error: FieldError) -> Self {
        Self::new(location, QuickstartError::InvalidParameter(error))
    }

    /// A value violated a declared constraint.
    pub fn validation(location: Location, error: FieldError) -> Self {
        Self::new(location, QuickstartError::Validation(vec![error]))
    }

    /// HTTP status the error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unreadable { status, .. } => *status,
        }
    }
}

/// JSON body for validation failures.
#[derive(Serialize)]
struct ValidationBody<'a> {
    detail: Vec<ErrorDetail<'a>>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    loc: Vec<&'a str>,
    msg: String,
    input: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    ctx: Option<Value>,
}

impl<'a> ErrorDetail<'a> {
    fn new(location: Location, field: &'a FieldError) -> Self {
        let mut loc = vec![location.as_str()];
        loc.extend(field.field.as_deref());
        Self {
            kind: field.error.kind(),
            loc,
            msg: field.error.to_string(),
            input: &field.input,
            ctx: field.error.context(),
        }
    }
}

/// JSON body for requests that could not be read.
#[derive(Serialize)]
struct MessageBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Invalid { location, error } => {
                tracing::debug!(?location, %error, fields = ?error.field_errors(), "rejected request");
                let body = ValidationBody {
                    detail: error
                        .field_errors()
                        .iter()
                        .map(|field| ErrorDetail::new(*location, field))
                        .collect(),
                };
                (status, Json(body)).into_response()
            }
            Self::Unreadable { message, .. } => {
                tracing::debug!(%status, %message, "unreadable request");
                (
                    status,
                    Json(MessageBody {
                        detail: message.clone(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use quickstart_domain::error::ValidationError;
    use serde_json::json;

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_render_bound_violation_with_context() {
        let err = ApiError::validation(
            Location::Path,
            FieldError::new("item_id", ValidationError::GreaterThan { gt: 1 }, "0"),
        );
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "detail": [{
                    "type": "greater_than",
                    "loc": ["path", "item_id"],
                    "msg": "Input should be greater than 1",
                    "input": "0",
                    "ctx": { "gt": 1 }
                }]
            })
        );
    }

    #[tokio::test]
    async fn should_render_root_error_without_field_in_loc() {
        let err = ApiError::validation(
            Location::Body,
            FieldError::root(ValidationError::Missing, Value::Null),
        );
        let (_, body) = body_json(err).await;

        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
        assert_eq!(body["detail"][0]["type"], "missing");
        assert!(body["detail"][0].get("ctx").is_none());
    }

    #[tokio::test]
    async fn should_render_every_field_error() {
        let err = ApiError::new(
            Location::Body,
            QuickstartError::Validation(vec![
                FieldError::new("name", ValidationError::Missing, json!({})),
                FieldError::new("price", ValidationError::Missing, json!({})),
            ]),
        );
        let (_, body) = body_json(err).await;

        assert_eq!(body["detail"].as_array().unwrap().len(), 2);
        assert_eq!(body["detail"][1]["loc"], json!(["body", "price"]));
    }

    #[tokio::test]
    async fn should_keep_status_of_unreadable_request() {
        let err = ApiError::Unreadable {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "too big".to_string(),
        };
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({ "detail": "too big" }));
    }
}
