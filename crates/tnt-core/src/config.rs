//! Client configuration management.
//!
//! Settings are resolved in layers, later layers winning:
//! built-in defaults, the optional file at `~/.config/tnt/config.json`,
//! then environment variables (`TNT_URL_PREFIX`, `TNT_API_KEY`,
//! `TNT_TIMEOUT_SECS`). Command line overrides are applied by the caller.
//!
//! The API key is never read from or written to the config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{Result, TntError};

/// Application name used for the config directory path
const APP_NAME: &str = "tnt";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.transitandtrails.org";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "TNT_URL_PREFIX";
pub const ENV_API_KEY: &str = "TNT_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "TNT_TIMEOUT_SECS";

/// Persisted settings. Everything is optional so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load from the default location, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "Loading config file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TntError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| TntError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Fully resolved settings for an [`HttpFetcher`](crate::api::HttpFetcher).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Resolve from the default config file and the process environment.
    pub fn from_env() -> Result<Self> {
        let file = FileConfig::load()?;
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Layer a file config and an environment lookup over the defaults.
    pub fn resolve<E>(file: FileConfig, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(base_url) = env(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(key) = env(ENV_API_KEY).filter(|v| !v.is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(secs) = env(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs: u64 = secs.parse().map_err(|_| {
                TntError::Config(format!(
                    "{} must be a number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize the base URL and reject values reqwest cannot use.
    pub fn validate(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&trimmed)
            .map_err(|e| TntError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        self.base_url = trimmed;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::resolve(FileConfig::default(), env_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            base_url: Some("https://file.example.org".to_string()),
            timeout_secs: Some(5),
        };
        let env = env_from(&[
            (ENV_BASE_URL, "https://env.example.org/"),
            (ENV_API_KEY, "secret"),
        ]);
        let config = ClientConfig::resolve(file, env).unwrap();
        assert_eq!(config.base_url, "https://env.example.org");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let env = env_from(&[(ENV_API_KEY, ""), (ENV_BASE_URL, "")]);
        let config = ClientConfig::resolve(FileConfig::default(), env).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let env = env_from(&[(ENV_TIMEOUT_SECS, "soon")]);
        let err = ClientConfig::resolve(FileConfig::default(), env).unwrap_err();
        assert!(matches!(err, TntError::Config(_)));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = ClientConfig::default()
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, TntError::Config(_)));
    }

    #[test]
    fn test_file_config_parses_partial_json() {
        let parsed: FileConfig = serde_json::from_str(r#"{"timeout_secs": 12}"#).unwrap();
        assert_eq!(parsed.timeout_secs, Some(12));
        assert_eq!(parsed.base_url, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("tnt-config-does-not-exist.json");
        assert_eq!(FileConfig::load_from(&path).unwrap(), FileConfig::default());
    }
}
