//! In-memory `Fetch` implementation for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::api::{Fetch, QueryParams, Result, TntError};

enum Reply {
    Ready(Result<Value>),
    Pending,
}

/// Serves canned bodies per path and records every call in order.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: Value) -> Self {
        self.responses.insert(path.into(), Reply::Ready(Ok(body)));
        self
    }

    pub fn with_error(mut self, path: impl Into<String>, err: TntError) -> Self {
        self.responses.insert(path.into(), Reply::Ready(Err(err)));
        self
    }

    /// A path whose request never completes.
    pub fn with_pending(mut self, path: impl Into<String>) -> Self {
        self.responses.insert(path.into(), Reply::Pending);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

impl Fetch for StubFetcher {
    async fn get(&self, path: &str, _query: &QueryParams) -> Result<Value> {
        self.calls.lock().unwrap().push(path.to_string());
        // Suspend once so sibling branches of a join get polled in between.
        tokio::task::yield_now().await;
        match self.responses.get(path) {
            Some(Reply::Ready(reply)) => reply.clone(),
            Some(Reply::Pending) => futures::future::pending().await,
            None => Err(TntError::Transport {
                status: 404,
                body: format!("{{\"error\":\"no stub for {}\"}}", path),
            }),
        }
    }
}
