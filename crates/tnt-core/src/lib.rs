//! Client library for the Transit & Trails API.
//!
//! Besides one accessor per endpoint, trailheads and trips can be fetched as
//! GeoJSON Features assembled from several concurrent requests:
//!
//! ```no_run
//! # async fn demo() -> tnt_core::Result<()> {
//! let client = tnt_core::TntClient::from_env()?;
//! let feature = client.get_trip_as_geojson(7).await?;
//! println!("{}", serde_json::to_string(&feature).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod geo;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{Fetch, HttpFetcher, QueryParams, Result, TntClient, TntError};
pub use config::ClientConfig;
pub use geo::{Feature, Geometry, Position, Route};
