//! Data models for Transit & Trails entities.
//!
//! Entities (trailheads, trips, campgrounds, users) are kept as raw JSON
//! objects since the API adds fields freely; only the pieces the
//! composition logic reads are typed:
//!
//! - `Attribute`: one entry of an attribute list
//! - `Entity`: a JSON object as returned by the API

pub mod attribute;

pub use attribute::{attribute_names, Attribute};

/// A JSON object as returned by the API.
pub type Entity = serde_json::Map<String, serde_json::Value>;

/// Interpret a response body as an entity object.
pub fn into_entity(value: serde_json::Value, what: &str) -> crate::api::Result<Entity> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(crate::api::TntError::InvalidResponse(format!(
            "expected {} to be a JSON object, got {}",
            what,
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
