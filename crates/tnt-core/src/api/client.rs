//! API client for the Transit & Trails REST API.
//!
//! `TntClient` exposes one method per endpoint. Every method is a single
//! call into a [`Fetch`] implementation; the GeoJSON compositions built on
//! top of these live in [`crate::geojson`].

use serde_json::Value;

use crate::config::ClientConfig;
use crate::geo::{decode_route, Route};

use super::routes::{self, Resource, SubResource};
use super::{Fetch, HttpFetcher, QueryParams, Result};

/// API client for Transit & Trails.
/// Clone is cheap when the fetcher is (the reqwest-backed one shares its pool).
#[derive(Debug, Clone)]
pub struct TntClient<F = HttpFetcher> {
    fetcher: F,
}

impl TntClient<HttpFetcher> {
    /// Create a client over HTTP from resolved configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new(config)?))
    }

    /// Create a client from the config file and environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<F: Fetch> TntClient<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Generic authenticated GET for endpoints without a dedicated method
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.fetcher.get(path, query).await
    }

    async fn get_path(&self, path: String) -> Result<Value> {
        self.fetcher.get(&path, &QueryParams::new()).await
    }

    async fn list(&self, resource: Resource, query: &QueryParams) -> Result<Value> {
        self.fetcher.get(&routes::collection(resource), query).await
    }

    // ===== Attribute categories =====

    pub async fn get_attribute_categories(&self, query: &QueryParams) -> Result<Value> {
        self.list(Resource::AttributeCategory, query).await
    }

    // ===== Campgrounds =====

    pub async fn get_campgrounds(&self, query: &QueryParams) -> Result<Value> {
        self.list(Resource::Campground, query).await
    }

    pub async fn get_campground(&self, id: u64) -> Result<Value> {
        self.get_path(routes::item(Resource::Campground, id)).await
    }

    /// Attributes of one campground, or the full catalog when `id` is `None`
    pub async fn get_campground_attributes(&self, id: Option<u64>) -> Result<Value> {
        self.get_path(routes::attributes(Resource::Campground, id)).await
    }

    pub async fn get_campground_maps(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Campground, id, SubResource::Maps)).await
    }

    pub async fn get_campground_photos(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Campground, id, SubResource::Photos)).await
    }

    // ===== Trailheads =====

    pub async fn get_trailheads(&self, query: &QueryParams) -> Result<Value> {
        self.list(Resource::Trailhead, query).await
    }

    pub async fn get_trailhead(&self, id: u64) -> Result<Value> {
        self.get_path(routes::item(Resource::Trailhead, id)).await
    }

    /// Attributes of one trailhead, or the full catalog when `id` is `None`
    pub async fn get_trailhead_attributes(&self, id: Option<u64>) -> Result<Value> {
        self.get_path(routes::attributes(Resource::Trailhead, id)).await
    }

    pub async fn get_trailhead_maps(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Trailhead, id, SubResource::Maps)).await
    }

    pub async fn get_trailhead_photos(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Trailhead, id, SubResource::Photos)).await
    }

    // ===== Trips =====

    pub async fn get_trips(&self, query: &QueryParams) -> Result<Value> {
        self.list(Resource::Trip, query).await
    }

    pub async fn get_trip(&self, id: u64) -> Result<Value> {
        self.get_path(routes::item(Resource::Trip, id)).await
    }

    /// Attributes of one trip, or the full catalog when `id` is `None`
    pub async fn get_trip_attributes(&self, id: Option<u64>) -> Result<Value> {
        self.get_path(routes::attributes(Resource::Trip, id)).await
    }

    pub async fn get_trip_maps(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Trip, id, SubResource::Maps)).await
    }

    pub async fn get_trip_photos(&self, id: u64) -> Result<Value> {
        self.get_path(routes::sub_resource(Resource::Trip, id, SubResource::Photos)).await
    }

    /// Fetch a trip's route, decoded and flipped to (lon, lat) order
    pub async fn get_trip_route(&self, id: u64) -> Result<Route> {
        let body = self
            .get_path(routes::sub_resource(Resource::Trip, id, SubResource::Route))
            .await?;
        decode_route(&body)
    }

    // ===== Users =====

    pub async fn get_users(&self, query: &QueryParams) -> Result<Value> {
        self.list(Resource::User, query).await
    }

    pub async fn get_user(&self, id: u64) -> Result<Value> {
        self.get_path(routes::item(Resource::User, id)).await
    }
}
