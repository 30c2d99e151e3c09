//! Coercion of raw text parameters into typed values.
//!
//! Path segments and query values always arrive as text. These functions turn
//! them into typed values, failing with a [`ValidationError`] describing the
//! first violated constraint.

use crate::error::ValidationError;

/// Parse a signed integer, tolerating surrounding whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::IntParsing`] when `raw` is not an integer.
pub fn parse_int(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::IntParsing)
}

/// Parse a boolean flag.
///
/// Accepted spellings are case-insensitive: `true`, `1`, `yes`, `on`, `t`,
/// `y` and their negative counterparts `false`, `0`, `no`, `off`, `f`, `n`.
///
/// # Errors
///
/// Returns [`ValidationError::BoolParsing`] for any other input.
pub fn parse_bool(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(ValidationError::BoolParsing),
    }
}

/// Parse an integer that must be greater than or equal to `ge`.
///
/// # Errors
///
/// Returns [`ValidationError::IntParsing`] for non-integers and
/// [`ValidationError::GreaterThanEqual`] when the value is below `ge`.
pub fn parse_int_ge(raw: &str, ge: i64) -> Result<i64, ValidationError> {
    let value = parse_int(raw)?;
    if value < ge {
        return Err(ValidationError::GreaterThanEqual { ge });
    }
    Ok(value)
}

/// Treat an empty optional string as absent.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_plain_and_signed_integers() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(parse_int("+3"), Ok(3));
        assert_eq!(parse_int(" 12 "), Ok(12));
    }

    #[test]
    fn should_reject_non_integer_text() {
        assert_eq!(parse_int("abc"), Err(ValidationError::IntParsing));
        assert_eq!(parse_int("1.5"), Err(ValidationError::IntParsing));
        assert_eq!(parse_int(""), Err(ValidationError::IntParsing));
    }

    #[test]
    fn should_parse_boolean_spellings() {
        for raw in ["true", "True", "1", "yes", "on", "t", "Y"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "FALSE", "0", "no", "off", "f", "n"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn should_reject_unknown_boolean_spelling() {
        assert_eq!(parse_bool("maybe"), Err(ValidationError::BoolParsing));
        assert_eq!(parse_bool(""), Err(ValidationError::BoolParsing));
    }

    #[test]
    fn should_enforce_lower_bound() {
        assert_eq!(parse_int_ge("0", 0), Ok(0));
        assert_eq!(
            parse_int_ge("-1", 0),
            Err(ValidationError::GreaterThanEqual { ge: 0 })
        );
    }

    #[test]
    fn should_drop_empty_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
