//! Trip route decoding.
//!
//! The route endpoint answers with a JSON object whose `route` field is a
//! *string* holding another JSON document: an array of `[lat, lon, ...]`
//! points. GeoJSON wants `[lon, lat]`, so every point is flipped on the way
//! out. Values past the first two (elevation, time) are dropped.

use serde_json::Value;

use crate::api::{Result, TntError};
use crate::models::json_kind;

use super::Route;

/// Field of the route response that carries the encoded coordinates
const ROUTE_FIELD: &str = "route";

/// Decode a trip-route response body into GeoJSON-ordered coordinates.
pub fn decode_route(body: &Value) -> Result<Route> {
    let encoded = match body.get(ROUTE_FIELD) {
        Some(Value::String(encoded)) => encoded,
        Some(other) => {
            return Err(TntError::MalformedRoute(format!(
                "expected `{}` to be a string, got {}",
                ROUTE_FIELD,
                json_kind(other)
            )))
        }
        None => {
            return Err(TntError::MalformedRoute(format!(
                "response has no `{}` field",
                ROUTE_FIELD
            )))
        }
    };
    decode_route_str(encoded)
}

/// Decode the inner `[[lat, lon, ...], ...]` document and flip each point.
pub fn decode_route_str(encoded: &str) -> Result<Route> {
    let points: Vec<Vec<f64>> =
        serde_json::from_str(encoded).map_err(|e| TntError::MalformedRoute(e.to_string()))?;

    points
        .into_iter()
        .enumerate()
        .map(|(index, point)| match point[..] {
            [lat, lon, ..] => Ok(vec![lon, lat]),
            _ => Err(TntError::MalformedRoute(format!(
                "route point {} has {} coordinate(s), expected at least 2",
                index,
                point.len()
            ))),
        })
        .collect()
}
