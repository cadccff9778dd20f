use serde::Serialize;
use thiserror::Error;

/// A single offending input field.
///
/// `loc` is the path to the field, starting with where it came from
/// (`"body"` or `"query"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: &[&str], msg: &str, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|part| (*part).to_string()).collect(),
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }

    /// A required field was not supplied.
    pub fn missing(loc: &[&str]) -> Self {
        Self::new(loc, "field required", "value_error.missing")
    }

    /// A required field was supplied as `null`.
    pub fn none_not_allowed(loc: &[&str]) -> Self {
        Self::new(loc, "none is not an allowed value", "type_error.none.not_allowed")
    }

    pub fn not_a_string(loc: &[&str]) -> Self {
        Self::new(loc, "str type expected", "type_error.str")
    }

    pub fn not_a_float(loc: &[&str]) -> Self {
        Self::new(loc, "value is not a valid float", "type_error.float")
    }

    pub fn not_an_object(loc: &[&str]) -> Self {
        Self::new(loc, "value is not a valid dict", "type_error.dict")
    }

    /// The request body could not be parsed as JSON at all.
    pub fn json_decode(message: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: message.into(),
            kind: "value_error.jsondecode".to_string(),
        }
    }
}

/// Input did not match the expected shape.
///
/// Serializes as `{"detail": [...]}`, one element per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} validation error(s): {}", .errors.len(), describe(.errors))]
pub struct ValidationError {
    #[serde(rename = "detail")]
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join(", ")
}
