//! Input schema for address payloads and range queries.
//!
//! Validation reports every offending field at once rather than stopping at
//! the first one. Types are checked, values are not: coordinates outside
//! [-90, 90] / [-180, 180] and over-long names are accepted.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::error::{FieldError, ValidationError};
use super::types::Address;
use crate::storage::LongitudeRange;

/// Validates a JSON request body into an [`Address`].
///
/// - `name`: required string
/// - `address`: optional string, `null` allowed
/// - `lat`, `lng`: required floats; integers are widened, numeric strings
///   are parsed and booleans become `1.0` / `0.0`
pub fn validate_address(body: &Value) -> Result<Address, ValidationError> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationError::single(FieldError::not_an_object(&["body"])));
    };

    let name = required_string(fields, "name");
    let address = optional_string(fields, "address");
    let lat = required_float(fields, "lat");
    let lng = required_float(fields, "lng");

    match (name, address, lat, lng) {
        (Ok(name), Ok(address), Ok(lat), Ok(lng)) => Ok(Address {
            name,
            address,
            lat,
            lng,
        }),
        (name, address, lat, lng) => Err(ValidationError::new(
            [name.err(), address.err(), lat.err(), lng.err()]
                .into_iter()
                .flatten()
                .collect(),
        )),
    }
}

/// Validates the `lng_from` / `lng_to` query parameters.
///
/// Both are required and must parse as floats. A reversed range is not an
/// error here; it simply matches nothing.
pub fn validate_longitude_range(
    params: &HashMap<String, String>,
) -> Result<LongitudeRange, ValidationError> {
    let from = query_float(params, "lng_from");
    let to = query_float(params, "lng_to");

    match (from, to) {
        (Ok(from), Ok(to)) => Ok(LongitudeRange::new(from, to)),
        (from, to) => Err(ValidationError::new(
            [from.err(), to.err()].into_iter().flatten().collect(),
        )),
    }
}

fn required_string(fields: &Map<String, Value>, key: &str) -> Result<String, FieldError> {
    match fields.get(key) {
        None => Err(FieldError::missing(&["body", key])),
        Some(Value::Null) => Err(FieldError::none_not_allowed(&["body", key])),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::not_a_string(&["body", key])),
    }
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, FieldError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldError::not_a_string(&["body", key])),
    }
}

fn required_float(fields: &Map<String, Value>, key: &str) -> Result<f64, FieldError> {
    match fields.get(key) {
        None => Err(FieldError::missing(&["body", key])),
        Some(Value::Null) => Err(FieldError::none_not_allowed(&["body", key])),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FieldError::not_a_float(&["body", key])),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FieldError::not_a_float(&["body", key])),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(_) => Err(FieldError::not_a_float(&["body", key])),
    }
}

fn query_float(params: &HashMap<String, String>, key: &str) -> Result<f64, FieldError> {
    let raw = params
        .get(key)
        .ok_or_else(|| FieldError::missing(&["query", key]))?;

    raw.trim()
        .parse::<f64>()
        .map_err(|_| FieldError::not_a_float(&["query", key]))
}
