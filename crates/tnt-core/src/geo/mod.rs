//! GeoJSON output for trailheads and trips.
//!
//! - `feature`: `Feature` construction on top of the `geojson` crate
//! - `route`: decoding of the string-encoded trip route
//! - `memo`: per-composition sharing of author lookups
//! - `compose`: the concurrent fetch-and-merge compositions

pub mod compose;
pub mod feature;
pub mod memo;
pub mod route;

pub use compose::{compose_trailhead, compose_trip};
pub use feature::{Feature, Geometry, Position, Route};
pub use memo::AuthorMemoizer;
pub use route::{decode_route, decode_route_str};
