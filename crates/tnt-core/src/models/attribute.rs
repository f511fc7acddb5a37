use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{Result, TntError};

/// Attribute attached to a trailhead, trip or campground (e.g. "scenic").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Parse an attribute list body and project it to names, keeping order.
pub fn attribute_names(body: Value) -> Result<Vec<String>> {
    let attributes: Vec<Attribute> = serde_json::from_value(body)
        .map_err(|e| TntError::InvalidResponse(format!("Failed to parse attribute list: {}", e)))?;
    Ok(attributes.into_iter().map(|a| a.name).collect())
}
