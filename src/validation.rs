//! Input validation rules evaluated against typed request data.
//!
//! A small set of composable checks (required, min-length, max-length,
//! format-matches) replaces schema-driven validation. Rules chain with `?`
//! and short-circuit on the first violation, producing a 400 with a
//! human-readable description of the broken rule.

use serde_json::json;

use crate::error::AppError;

/// A named input field that may be absent.
pub struct Field<'a> {
    name: &'static str,
    value: Option<&'a str>,
}

/// Entry point for a rule chain.
pub fn field<'a>(name: &'static str, value: Option<&'a str>) -> Field<'a> {
    Field { name, value }
}

impl<'a> Field<'a> {
    /// The field must be present and non-empty.
    pub fn required(self) -> Result<Checked<'a>, AppError> {
        match self.value {
            Some(value) if !value.is_empty() => Ok(Checked {
                name: self.name,
                value,
            }),
            _ => Err(AppError::validation(
                format!("\"{}\" is required", self.name),
                json!({ "field": self.name }),
            )),
        }
    }
}

/// A field that passed the presence check; carries the remaining rules.
#[derive(Debug)]
pub struct Checked<'a> {
    name: &'static str,
    pub value: &'a str,
}

impl<'a> Checked<'a> {
    pub fn min_len(self, min: usize) -> Result<Self, AppError> {
        if self.value.chars().count() < min {
            return Err(AppError::validation(
                format!(
                    "\"{}\" length must be at least {} characters long",
                    self.name, min
                ),
                json!({ "field": self.name, "min": min }),
            ));
        }
        Ok(self)
    }

    pub fn max_len(self, max: usize) -> Result<Self, AppError> {
        if self.value.chars().count() > max {
            return Err(AppError::validation(
                format!(
                    "\"{}\" length must be less than or equal to {} characters long",
                    self.name, max
                ),
                json!({ "field": self.name, "max": max }),
            ));
        }
        Ok(self)
    }

    /// Format check. `expected` names the required format in the error message.
    pub fn matches<F>(self, expected: &'static str, predicate: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> bool,
    {
        if predicate(self.value) {
            Ok(self)
        } else {
            Err(AppError::validation(
                format!("\"{}\" must be {}", self.name, expected),
                json!({ "field": self.name }),
            ))
        }
    }
}

/// Parses a path identifier in the storage format (positive base-10 integer).
///
/// A malformed identifier is reported as 404 rather than 400, so callers
/// cannot tell a bad id apart from an absent record.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    field("id", Some(raw))
        .required()
        .and_then(|id| id.matches("a positive integer", is_storage_id))
        .map_err(|_| AppError::not_found("Invalid ID.", json!({})))?;

    // is_storage_id guarantees the parse succeeds.
    Ok(raw.parse().unwrap_or_default())
}

fn is_storage_id(value: &str) -> bool {
    value.parse::<i64>().map(|id| id > 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_missing() {
        let err = field("name", None).required().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_required_empty() {
        assert!(field("name", Some("")).required().is_err());
    }

    #[test]
    fn test_min_len_rejects_short_values() {
        let err = field("name", Some("1234"))
            .required()
            .unwrap()
            .min_len(5)
            .unwrap_err();

        match err {
            AppError::Validation { message, .. } => {
                assert!(message.contains("at least 5"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_max_len_rejects_long_values() {
        let long = "a".repeat(51);
        let result = field("name", Some(long.as_str()))
            .required()
            .unwrap()
            .min_len(5)
            .unwrap()
            .max_len(50);

        assert!(result.is_err());
    }

    #[test]
    fn test_bounds_accept_valid_values() {
        let checked = field("name", Some("genre1"))
            .required()
            .unwrap()
            .min_len(5)
            .unwrap()
            .max_len(50)
            .unwrap();

        assert_eq!(checked.value, "genre1");
    }

    #[test]
    fn test_matches_applies_predicate() {
        assert!(
            field("code", Some("abc"))
                .required()
                .unwrap()
                .matches("lowercase", |v| v.chars().all(|c| c.is_ascii_lowercase()))
                .is_ok()
        );
        assert!(
            field("code", Some("ABC"))
                .required()
                .unwrap()
                .matches("lowercase", |v| v.chars().all(|c| c.is_ascii_lowercase()))
                .is_err()
        );
    }

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_malformed_is_not_found() {
        for raw in ["abc", "", "-3", "0", "12.5", "1e3"] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, AppError::NotFound { .. }), "raw = {raw:?}");
        }
    }
}
