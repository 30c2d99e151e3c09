//! Item — the record accepted as a request body, and the bounded item id.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{FieldError, QuickstartError, ValidationError};
use crate::param::parse_int;

/// An item described by a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl Item {
    /// Decode an item from an already-parsed JSON document.
    ///
    /// Every field is checked and all violations are reported together.
    /// Unknown fields are ignored. Numbers may be given as JSON numbers, as
    /// numeric strings, or as booleans (`true` is `1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`QuickstartError::Validation`] when `value` is not an object,
    /// when `name` or `price` is absent, or when any field has the wrong type.
    pub fn from_json(value: &Value) -> Result<Self, QuickstartError> {
        let Value::Object(fields) = value else {
            return Err(QuickstartError::Validation(vec![FieldError::root(
                ValidationError::ObjectType,
                value.clone(),
            )]));
        };

        let mut errors = Vec::new();
        let name = required(fields, value, "name", as_string, &mut errors);
        let description = optional(fields, "description", as_string, &mut errors);
        let price = required(fields, value, "price", as_float, &mut errors);
        let tax = optional(fields, "tax", as_float, &mut errors);

        match (name, price) {
            (Some(name), Some(price)) if errors.is_empty() => Ok(Self {
                name,
                description,
                price,
                tax,
            }),
            _ => Err(QuickstartError::Validation(errors)),
        }
    }
}

fn required<T>(
    fields: &Map<String, Value>,
    body: &Value,
    key: &str,
    decode: fn(&Value) -> Result<T, ValidationError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let Some(raw) = fields.get(key) else {
        errors.push(FieldError::new(key, ValidationError::Missing, body.clone()));
        return None;
    };
    collect(key, raw, decode, errors)
}

fn optional<T>(
    fields: &Map<String, Value>,
    key: &str,
    decode: fn(&Value) -> Result<T, ValidationError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(raw) => collect(key, raw, decode, errors),
    }
}

fn collect<T>(
    key: &str,
    raw: &Value,
    decode: fn(&Value) -> Result<T, ValidationError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match decode(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(FieldError::new(key, err, raw.clone()));
            None
        }
    }
}

fn as_string(raw: &Value) -> Result<String, ValidationError> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::StringType),
    }
}

// Non-finite values cannot be written back as JSON, so they are rejected.
fn as_float(raw: &Value) -> Result<f64, ValidationError> {
    match raw {
        Value::Number(n) => n.as_f64().ok_or(ValidationError::FloatType),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::FloatParsing),
        _ => Err(ValidationError::FloatType),
    }
}

/// Item identifier constrained to `1 < id <= 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Exclusive lower bound.
    pub const GT: i64 = 1;
    /// Inclusive upper bound.
    pub const LE: i64 = 1000;

    /// Check the bounds and wrap `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::GreaterThan`] or
    /// [`ValidationError::LessThanEqual`] when out of range.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= Self::GT {
            return Err(ValidationError::GreaterThan { gt: Self::GT });
        }
        if value > Self::LE {
            return Err(ValidationError::LessThanEqual { le: Self::LE });
        }
        Ok(Self(value))
    }

    /// Access the inner value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_int(s)?)
    }
}
