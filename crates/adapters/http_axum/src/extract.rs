//! Request extractors that report failures as [`ApiError`].
//!
//! Path segments are typed and bounded by [`ValidPath`] before the handler
//! runs, and before the body is read. Query values stay text and the body
//! stays an untyped JSON document until the domain parsing functions see them.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection, RawPathParamsRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde_json::Value;

use quickstart_domain::error::{FieldError, ValidationError};
use quickstart_domain::item::ItemId;
use quickstart_domain::model_name::ModelName;
use quickstart_domain::param::parse_int;

use crate::error::{ApiError, Location};

macro_rules! unreadable_from {
    ($($rejection:ty),* $(,)?) => {
        $(
            impl From<$rejection> for ApiError {
                fn from(rejection: $rejection) -> Self {
                    Self::Unreadable {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )*
    };
}

unreadable_from!(RawPathParamsRejection, QueryRejection, BytesRejection);

/// A value that can be read from a single path capture.
pub trait PathValue: Sized {
    /// Convert the decoded capture.
    ///
    /// # Errors
    ///
    /// Returns the violated rule when `raw` is not acceptable.
    fn parse_path(raw: &str) -> Result<Self, ValidationError>;

    /// Turn a failed conversion into a response. Coercion failures are
    /// invalid parameters unless the type says otherwise.
    fn reject(error: FieldError) -> ApiError {
        ApiError::invalid_parameter(Location::Path, error)
    }
}

impl PathValue for String {
    fn parse_path(raw: &str) -> Result<Self, ValidationError> {
        Ok(raw.to_owned())
    }
}

impl PathValue for i64 {
    fn parse_path(raw: &str) -> Result<Self, ValidationError> {
        parse_int(raw)
    }
}

impl PathValue for ModelName {
    fn parse_path(raw: &str) -> Result<Self, ValidationError> {
        raw.parse()
    }
}

impl PathValue for ItemId {
    fn parse_path(raw: &str) -> Result<Self, ValidationError> {
        raw.parse()
    }

    // Bounded ids report every failure, non-integers included, as validation.
    fn reject(error: FieldError) -> ApiError {
        ApiError::validation(Location::Path, error)
    }
}

/// The single path capture of a route, converted through [`PathValue`].
///
/// Errors name the capture, so `/items/{item_id}` reports
/// `["path","item_id"]`.
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: PathValue,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state).await?;
        let Some((field, raw)) = params.iter().next() else {
            return Err(ApiError::Unreadable {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "route has no path parameter".to_string(),
            });
        };
        T::parse_path(raw)
            .map(Self)
            .map_err(|err| T::reject(FieldError::new(field, err, raw)))
    }
}

/// Raw query string pairs, in request order.
///
/// When a key is repeated, the last occurrence wins.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self(pairs))
    }
}

impl QueryParams {
    /// Raw value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Owned text value of `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    /// Parse the value of `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming `key` when `parse` rejects the value.
    pub fn parse<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, FieldError> {
        self.get(key)
            .map(|raw| parse(raw).map_err(|err| FieldError::new(key, err, raw)))
            .transpose()
    }
}

/// Request body decoded as an untyped JSON document.
///
/// The body is read as JSON when the content type is absent or JSON. An empty
/// body is reported as `missing`, malformed JSON as `json_invalid`, and a body
/// of any other content type as not being an object.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = req
            .headers()
            .get(CONTENT_TYPE)
            .is_none_or(|value| value.to_str().is_ok_and(is_json_content_type));
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() {
            return Err(ApiError::validation(
                Location::Body,
                FieldError::root(ValidationError::Missing, Value::Null),
            ));
        }
        if !json {
            return Err(ApiError::validation(
                Location::Body,
                FieldError::root(
                    ValidationError::ObjectType,
                    String::from_utf8_lossy(&bytes).into_owned(),
                ),
            ));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            ApiError::validation(
                Location::Body,
                FieldError::root(
                    ValidationError::JsonInvalid {
                        reason: err.to_string(),
                    },
                    Value::Object(serde_json::Map::new()),
                ),
            )
        })
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
