//! Raw-record normalization.
//!
//! The backend serves pet records in two shapes: the document store's
//! snake_case fields with a `_id` identity, and older camelCase payloads.
//! `normalize_pet` reconciles both into the canonical [`Pet`], applying
//! defaults for the optional counters. Aliasing precedence is fixed:
//! snake_case wins over camelCase, `id` wins over `_id`.
//!
//! Normalization is pure and total over valid payloads: a record missing
//! every optional field still normalizes using defaults alone. Only a record
//! with no usable identity is rejected.

use serde_json::{Map, Value};

use crate::defaults;
use crate::error::{Error, Result};
use crate::models::Pet;

/// Normalize one raw backend record into a canonical [`Pet`].
///
/// Fails with [`Error::MalformedRecord`] when the record is not a JSON
/// object or carries neither `id` nor `_id`.
pub fn normalize_pet(raw: &Value) -> Result<Pet> {
    let obj = raw
        .as_object()
        .ok_or_else(|| Error::MalformedRecord("record is not a JSON object".to_string()))?;

    let id = first_string(obj, &["id", "_id"])
        .ok_or_else(|| Error::MalformedRecord("record has neither id nor _id".to_string()))?;

    Ok(Pet {
        id,
        name: string_field(obj, "name").unwrap_or_default(),
        species: string_field(obj, "species").unwrap_or_default(),
        breed: string_field(obj, "breed").unwrap_or_default(),
        age: int_field(obj, "age"),
        weight: float_field(obj, "weight"),
        gender: string_field(obj, "gender").unwrap_or_default(),
        dob: string_field(obj, "dob"),
        color: string_field(obj, "color"),
        description: string_field(obj, "description"),
        image: string_field(obj, "image"),
        health_score: first_int(obj, &["health_score", "healthScore"])
            .unwrap_or(defaults::HEALTH_SCORE),
        videos_analyzed: first_int(obj, &["videos_analyzed", "videosAnalyzed"])
            .unwrap_or(defaults::VIDEOS_ANALYZED),
        appointments: int_field(obj, "appointments").unwrap_or(defaults::APPOINTMENTS),
        created_at: first_string(obj, &["created_at", "createdAt"]),
        // Client-side assumption; the backend serves no status field.
        status: defaults::PET_STATUS.to_string(),
    })
}

/// Normalize every element of a list response.
///
/// A non-array body normalizes to an empty list (the backend has been seen
/// returning error objects with a 200 during deploys); a malformed element
/// fails the whole call rather than dropping records silently.
pub fn normalize_pets(raw: &Value) -> Result<Vec<Pet>> {
    match raw.as_array() {
        Some(items) => items.iter().map(normalize_pet).collect(),
        None => Ok(Vec::new()),
    }
}

/// First non-null value among `keys`, in precedence order.
fn first_value<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_value(obj, keys).and_then(value_to_string)
}

fn first_int(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    first_value(obj, keys).and_then(value_to_int)
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    first_string(obj, &[key])
}

fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    first_int(obj, &[key])
}

fn float_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    first_value(obj, &[key]).and_then(Value::as_f64)
}

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        // Document-store ids occasionally surface as numbers.
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_to_int(v: &Value) -> Option<i64> {
    // Counters occasionally arrive as JSON floats; round rather than
    // truncate so 84.6 does not read as 84.
    v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64))
}
