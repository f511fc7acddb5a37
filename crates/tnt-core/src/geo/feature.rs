//! Feature construction on top of the `geojson` crate types.

pub use geojson::{feature::Id, Feature, Geometry, Position};
use serde_json::Value;

use crate::models::Entity;

/// Trip route: positions in GeoJSON order, `[longitude, latitude]`.
pub type Route = Vec<Position>;

/// Wrap an entity as a Feature with the given geometry. The entity becomes
/// the properties object and its `id`, when a number or string, the
/// Feature id.
pub(crate) fn entity_feature(geometry: geojson::Value, properties: Entity) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: feature_id(&properties),
        properties: Some(properties),
        foreign_members: None,
    }
}

fn feature_id(entity: &Entity) -> Option<Id> {
    match entity.get("id")? {
        Value::Number(n) => Some(Id::Number(n.clone())),
        Value::String(s) => Some(Id::String(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> Entity {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_point_feature_shape() {
        let feature = entity_feature(
            geojson::Value::Point(vec![-20.1, 10.5]),
            entity(json!({"id": 42, "name": "X"})),
        );

        assert_eq!(feature.id, Some(Id::Number(42.into())));
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "id": 42,
                "geometry": {"type": "Point", "coordinates": [-20.1, 10.5]},
                "properties": {"id": 42, "name": "X"}
            })
        );
    }

    #[test]
    fn test_string_id_is_kept() {
        let feature = entity_feature(
            geojson::Value::LineString(vec![vec![20.0, 10.0], vec![21.0, 11.0]]),
            entity(json!({"id": "loop-7"})),
        );
        assert_eq!(feature.id, Some(Id::String("loop-7".to_string())));

        let rendered = serde_json::to_value(&feature).unwrap();
        assert_eq!(rendered["geometry"]["type"], "LineString");
        assert_eq!(rendered["geometry"]["coordinates"], json!([[20.0, 10.0], [21.0, 11.0]]));
    }

    #[test]
    fn test_unusable_id_is_omitted() {
        for id in [json!(null), json!([1]), json!({"n": 1})] {
            let feature =
                entity_feature(geojson::Value::Point(vec![0.0, 0.0]), entity(json!({"id": id})));
            assert_eq!(feature.id, None);
        }

        let feature = entity_feature(geojson::Value::Point(vec![0.0, 0.0]), Entity::new());
        assert_eq!(feature.id, None);
    }
}
