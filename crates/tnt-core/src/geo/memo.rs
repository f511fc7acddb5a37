//! Per-composition author lookups.
//!
//! One memoizer lives exactly as long as one trip composition. Every
//! request for the same author id while it is alive shares a single fetch
//! and its single outcome, success or failure.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tracing::debug;

use crate::api::{routes, Fetch, QueryParams, Result};

/// A user fetch that any number of callers can await.
pub type SharedLookup<'a> = Shared<BoxFuture<'a, Result<Value>>>;

pub struct AuthorMemoizer<'a, F> {
    fetcher: &'a F,
    // Never held across an await.
    lookups: Mutex<HashMap<String, SharedLookup<'a>>>,
}

impl<'a, F: Fetch + 'a> AuthorMemoizer<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            lookups: Mutex::new(HashMap::new()),
        }
    }

    /// Return the lookup for `author_id`, starting it on first request.
    pub fn resolve(&self, author_id: &str) -> SharedLookup<'a> {
        let mut lookups = self.lookups.lock().unwrap_or_else(PoisonError::into_inner);
        lookups
            .entry(author_id.to_string())
            .or_insert_with(|| {
                debug!(author_id = author_id, "Fetching author");
                let fetcher = self.fetcher;
                let path = routes::user(author_id);
                async move {
                    let query = QueryParams::new();
                    fetcher.get(&path, &query).await
                }
                .boxed()
                .shared()
            })
            .clone()
    }

    #[cfg(test)]
    fn distinct_authors(&self) -> usize {
        self.lookups.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TntError;
    use crate::test_support::StubFetcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_same_author_fetched_once() {
        let stub = StubFetcher::new().with("/api/v1/users/19", json!({"id": 19, "name": "Ann"}));
        let memo = AuthorMemoizer::new(&stub);

        let (a, b) = tokio::join!(memo.resolve("19"), memo.resolve("19"));

        assert_eq!(a.unwrap(), json!({"id": 19, "name": "Ann"}));
        assert_eq!(b.unwrap()["name"], "Ann");
        assert_eq!(stub.call_count("/api/v1/users/19"), 1);
        assert_eq!(memo.distinct_authors(), 1);
    }

    #[tokio::test]
    async fn test_completed_lookup_is_reused() {
        let stub = StubFetcher::new().with("/api/v1/users/19", json!({"id": 19}));
        let memo = AuthorMemoizer::new(&stub);

        memo.resolve("19").await.unwrap();
        memo.resolve("19").await.unwrap();

        assert_eq!(stub.call_count("/api/v1/users/19"), 1);
    }

    #[tokio::test]
    async fn test_distinct_authors_fetched_independently() {
        let stub = StubFetcher::new()
            .with("/api/v1/users/1", json!({"id": 1}))
            .with("/api/v1/users/2", json!({"id": 2}));
        let memo = AuthorMemoizer::new(&stub);

        let (one, two) = tokio::join!(memo.resolve("1"), memo.resolve("2"));

        assert_eq!(one.unwrap()["id"], 1);
        assert_eq!(two.unwrap()["id"], 2);
        assert_eq!(stub.calls().len(), 2);
        assert_eq!(memo.distinct_authors(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_shared() {
        let stub = StubFetcher::new().with_error(
            "/api/v1/users/5",
            TntError::Transport { status: 500, body: "down".to_string() },
        );
        let memo = AuthorMemoizer::new(&stub);

        let (a, b) = tokio::join!(memo.resolve("5"), memo.resolve("5"));

        assert!(matches!(a, Err(TntError::Transport { status: 500, .. })));
        assert!(matches!(b, Err(TntError::Transport { status: 500, .. })));
        assert_eq!(stub.call_count("/api/v1/users/5"), 1);
    }

    #[tokio::test]
    async fn test_fresh_memoizer_fetches_again() {
        let stub = StubFetcher::new().with("/api/v1/users/19", json!({"id": 19}));

        AuthorMemoizer::new(&stub).resolve("19").await.unwrap();
        AuthorMemoizer::new(&stub).resolve("19").await.unwrap();

        assert_eq!(stub.call_count("/api/v1/users/19"), 2);
    }
}
