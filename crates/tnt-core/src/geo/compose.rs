//! Entity → GeoJSON Feature composition.
//!
//! Each composition fans out to the entity and its auxiliary endpoints,
//! joins them first-error-wins, and merges the results into one Feature.
//! The merge steps are plain functions so they can be used on data
//! obtained some other way.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::{Fetch, Result, TntClient, TntError};
use crate::models::{attribute_names, into_entity, json_kind, Entity};

use super::feature::entity_feature;
use super::{AuthorMemoizer, Feature, Route};

const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const ATTRIBUTES: &str = "attributes";
const AUTHOR: &str = "author";
const AUTHOR_ID: &str = "author_id";

/// Build a Point Feature from a trailhead and its attribute names.
///
/// `latitude` and `longitude` move out of the properties and into the
/// geometry as `[longitude, latitude]`.
pub fn compose_trailhead(mut trailhead: Entity, attributes: Vec<String>) -> Result<Feature> {
    let latitude = take_degrees(&mut trailhead, LATITUDE)?;
    let longitude = take_degrees(&mut trailhead, LONGITUDE)?;

    trailhead.insert(ATTRIBUTES.to_string(), Value::from(attributes));

    Ok(entity_feature(geojson::Value::Point(vec![longitude, latitude]), trailhead))
}

/// Build a LineString Feature from a trip, its author, route and attribute names.
///
/// Nothing is removed from the trip; `author` and `attributes` are added.
pub fn compose_trip(
    mut trip: Entity,
    author: Value,
    route: Route,
    attributes: Vec<String>,
) -> Feature {
    trip.insert(AUTHOR.to_string(), author);
    trip.insert(ATTRIBUTES.to_string(), Value::from(attributes));

    entity_feature(geojson::Value::LineString(route), trip)
}

/// Remove a coordinate field, accepting numbers or numeric strings.
fn take_degrees(entity: &mut Entity, field: &str) -> Result<f64> {
    let value = entity
        .remove(field)
        .ok_or_else(|| TntError::InvalidResponse(format!("trailhead has no `{}`", field)))?;

    let degrees = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    degrees.ok_or_else(|| {
        TntError::InvalidResponse(format!("trailhead `{}` is not a number: {}", field, value))
    })
}

/// The trip's `author_id` as a path segment.
fn author_key(trip: &Entity) -> Result<String> {
    match trip.get(AUTHOR_ID) {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(other) => Err(TntError::InvalidResponse(format!(
            "trip `{}` must be a number or string, got {}",
            AUTHOR_ID,
            json_kind(other)
        ))),
        None => Err(TntError::InvalidResponse(format!("trip has no `{}`", AUTHOR_ID))),
    }
}

impl<F: Fetch> TntClient<F> {
    /// Fetch a trailhead and its attributes concurrently and merge them into
    /// a Point Feature. The first failing request fails the whole call.
    pub async fn get_trailhead_as_geojson(&self, id: u64) -> Result<Feature> {
        debug!(trailhead_id = id, "Composing trailhead feature");

        let trailhead = async { into_entity(self.get_trailhead(id).await?, "trailhead") };
        let attributes = async {
            attribute_names(self.get_trailhead_attributes(Some(id)).await?)
        };

        let (trailhead, attributes) = futures::try_join!(trailhead, attributes)?;

        let feature = compose_trailhead(trailhead, attributes)?;
        info!(trailhead_id = id, "Trailhead feature composed");
        Ok(feature)
    }

    /// Fetch a trip with its author, route and attributes and merge them
    /// into a LineString Feature.
    ///
    /// The route and attribute requests start immediately; the author
    /// request starts as soon as the trip itself arrives. On the first
    /// failure the remaining requests are dropped and that error is returned.
    pub async fn get_trip_as_geojson(&self, id: u64) -> Result<Feature> {
        debug!(trip_id = id, "Composing trip feature");

        let authors = AuthorMemoizer::new(self.fetcher());

        let trip = async {
            let trip = into_entity(self.get_trip(id).await?, "trip")?;
            let author_id = author_key(&trip)?;
            debug!(
                trip_id = id,
                author_id = %author_id,
                "Trip received, resolving author"
            );
            let author = authors.resolve(&author_id).await?;
            Ok::<_, TntError>((trip, author))
        };
        let route = self.get_trip_route(id);
        let attributes = async { attribute_names(self.get_trip_attributes(Some(id)).await?) };

        let ((trip, author), route, attributes) = futures::try_join!(trip, route, attributes)?;

        info!(trip_id = id, points = route.len(), "Trip feature composed");
        Ok(compose_trip(trip, author, route, attributes))
    }
}
