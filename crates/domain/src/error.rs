//! Common error types used across the workspace.
//!
//! Validation is split in two levels:
//! - [`ValidationError`] describes *what* constraint was violated, independent
//!   of where the value came from.
//! - [`FieldError`] attaches that violation to a named field and keeps the
//!   offending input around for reporting.
//!
//! [`QuickstartError`] is the layer-level error returned by parsing functions.

use serde_json::{Value, json};

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field required")]
    Missing,

    #[error("Input should be a valid string")]
    StringType,

    #[error("Input should be a valid integer, unable to parse string as an integer")]
    IntParsing,

    #[error("Input should be a valid number")]
    FloatType,

    #[error("Input should be a valid number, unable to parse string as a number")]
    FloatParsing,

    #[error("Input should be a valid boolean, unable to interpret input")]
    BoolParsing,

    #[error("Input should be greater than {gt}")]
    GreaterThan { gt: i64 },

    #[error("Input should be greater than or equal to {ge}")]
    GreaterThanEqual { ge: i64 },

    #[error("Input should be less than or equal to {le}")]
    LessThanEqual { le: i64 },

    #[error("Input should be {expected}")]
    Enum { expected: &'static str },

    #[error("Input should be a valid dictionary or object to extract fields from")]
    ObjectType,

    #[error("JSON decode error")]
    JsonInvalid { reason: String },
}

impl ValidationError {
    /// Stable, machine-readable code for the violation.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::StringType => "string_type",
            Self::IntParsing => "int_parsing",
            Self::FloatType => "float_type",
            Self::FloatParsing => "float_parsing",
            Self::BoolParsing => "bool_parsing",
            Self::GreaterThan { .. } => "greater_than",
            Self::GreaterThanEqual { .. } => "greater_than_equal",
            Self::LessThanEqual { .. } => "less_than_equal",
            Self::Enum { .. } => "enum",
            Self::ObjectType => "model_attributes_type",
            Self::JsonInvalid { .. } => "json_invalid",
        }
    }

    /// Constraint parameters, when the violation has any.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::GreaterThan { gt } => Some(json!({ "gt": gt })),
            Self::GreaterThanEqual { ge } => Some(json!({ "ge": ge })),
            Self::LessThanEqual { le } => Some(json!({ "le": le })),
            Self::Enum { expected } => Some(json!({ "expected": expected })),
            Self::JsonInvalid { reason } => Some(json!({ "error": reason })),
            _ => None,
        }
    }
}

/// A [`ValidationError`] attributed to a field.
///
/// `field` is `None` when the violation concerns the whole container (e.g. a
/// missing or malformed request body).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}: {error}", .field.as_deref().unwrap_or("<root>"))]
pub struct FieldError {
    pub field: Option<String>,
    pub error: ValidationError,
    pub input: Value,
}

impl FieldError {
    /// Attribute `error` to the named field.
    #[must_use]
    pub fn new(field: impl Into<String>, error: ValidationError, input: impl Into<Value>) -> Self {
        Self {
            field: Some(field.into()),
            error,
            input: input.into(),
        }
    }

    /// Attribute `error` to the container itself.
    #[must_use]
    pub fn root(error: ValidationError, input: impl Into<Value>) -> Self {
        Self {
            field: None,
            error,
            input: input.into(),
        }
    }
}

/// Top-level error type for request parsing.
#[derive(Debug, thiserror::Error)]
pub enum QuickstartError {
    /// A path or query value failed coercion or enumeration membership.
    #[error("invalid parameter")]
    InvalidParameter(#[from] FieldError),

    /// A body failed field checks, or a parameter violated a declared bound.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
}

impl QuickstartError {
    /// All field errors carried by this error, in report order.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidParameter(err) => std::slice::from_ref(err),
            Self::Validation(errors) => errors,
        }
    }
}
