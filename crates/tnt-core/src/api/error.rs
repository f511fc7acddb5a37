use std::sync::Arc;

use thiserror::Error;

/// Errors are `Clone` so a memoized lookup can hand the same failure to every waiter.
#[derive(Error, Debug, Clone)]
pub enum TntError {
    #[error("An API key is required")]
    MissingApiKey,

    #[error("Request failed with status {status}: {}", truncate_body(.body))]
    Transport { status: u16, body: String },

    #[error("Malformed route: {0}")]
    MalformedRoute(String),

    #[error("Network error: {0}")]
    Network(#[source] Arc<reqwest::Error>),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TntError>;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Truncate a response body to avoid logging excessive data
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

impl TntError {
    /// Build a transport error from a non-200 response, keeping the raw body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        TntError::Transport {
            status: status.as_u16(),
            body,
        }
    }

    /// Raw response body for transport failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            TntError::Transport { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TntError {
    fn from(err: reqwest::Error) -> Self {
        TntError::Network(Arc::new(err))
    }
}
