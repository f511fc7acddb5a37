//! Authenticated GET against the Transit & Trails API.
//!
//! `Fetch` is the seam every accessor and composition goes through;
//! `HttpFetcher` is the reqwest-backed implementation.

use std::future::Future;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;

use super::{Result, TntError};

/// Query parameter carrying the API key
const API_KEY_PARAM: &str = "key";

/// Ordered query parameters. `None` values are dropped before the request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; a `None` value is kept only until the request is built.
    pub fn param<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.pairs.push((name.into(), value.map(|v| v.to_string())));
        self
    }

    /// Parameters that will actually be sent, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}

/// A single authenticated GET returning the decoded JSON body.
pub trait Fetch: Sync {
    fn get(&self, path: &str, query: &QueryParams) -> impl Future<Output = Result<Value>> + Send;
}

/// reqwest-backed fetcher.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HttpFetcher {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(TntError::MissingApiKey)
    }

    /// Full request URL: base + path, present params in order, key last.
    fn build_url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        let key = self.api_key()?;
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| TntError::Config(format!("invalid request URL for {}: {}", path, e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query.present() {
                pairs.append_pair(name, value);
            }
            pairs.append_pair(API_KEY_PARAM, key);
        }
        Ok(url)
    }

    /// Anything other than exactly 200 is a failure carrying the raw body.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status() == StatusCode::OK {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(TntError::from_status(status, body))
        }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        let url = self.build_url(path, query)?;

        debug!(path = path, "Sending GET request");
        let response = self.client.get(url).send().await?;

        let response = match Self::check_response(response).await {
            Ok(response) => response,
            Err(e) => {
                warn!(path = path, error = %e, "Request failed");
                return Err(e);
            }
        };

        let text = response.text().await?;
        debug!(path = path, bytes = text.len(), "Response received");

        serde_json::from_str(&text).map_err(|e| {
            TntError::InvalidResponse(format!("{} returned invalid JSON: {}", path, e))
        })
    }
}
