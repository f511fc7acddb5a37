//! REST API client module for Transit & Trails.
//!
//! This module provides the `TntClient` for fetching campgrounds,
//! trailheads, trips, users and attributes.
//!
//! Every request is a GET authenticated with the API key passed as the
//! `key` query parameter.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod routes;

pub use client::TntClient;
pub use error::{Result, TntError};
pub use fetcher::{Fetch, HttpFetcher, QueryParams};
pub use routes::{Resource, SubResource};
