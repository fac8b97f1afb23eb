//! Backend client configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Environment variable overriding `base_url`.
pub const ENV_API_URL: &str = "TCG_API_URL";
/// Environment variable overriding `timeout_secs`.
pub const ENV_API_TIMEOUT: &str = "TCG_API_TIMEOUT_SECS";

/// Backend client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and authority of the backend, no trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds (0 = no timeout).
    pub timeout_secs: u64,

    /// Sent as `User-Agent`.
    pub user_agent: String,

    /// Keep session cookies between requests (login state).
    pub cookie_store: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
            user_agent: concat!("tcg-deck-view/", env!("CARGO_PKG_VERSION")).to_string(),
            cookie_store: true,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TCG_API_URL` and `TCG_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var(ENV_API_URL) {
            config = config.with_base_url(url);
        }
        if let Ok(raw) = env::var(ENV_API_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                DeckError::validation(format!("{} must be a whole number, got '{}'", ENV_API_TIMEOUT, raw))
            })?;
            config = config.with_timeout_secs(secs);
        }

        Ok(config)
    }

    /// Set the base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    /// Absolute URL for an API path such as `/api/decks`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.cookie_store);
        assert!(config.user_agent.starts_with("tcg-deck-view/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("https://decks.example.com/")
            .with_timeout_secs(5)
            .with_cookie_store(false);

        assert_eq!(config.base_url, "https://decks.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.cookie_store);
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.url("/api/decks"), "http://127.0.0.1:8080/api/decks");
        assert_eq!(config.url("api/decks"), "http://127.0.0.1:8080/api/decks");
    }

    // Only test touching these variables, so it owns the process environment.
    #[test]
    fn test_from_env() {
        env::remove_var(ENV_API_URL);
        env::remove_var(ENV_API_TIMEOUT);
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());

        env::set_var(ENV_API_URL, "https://decks.example.com/");
        env::set_var(ENV_API_TIMEOUT, " 7 ");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://decks.example.com");
        assert_eq!(config.timeout_secs, 7);

        env::set_var(ENV_API_TIMEOUT, "soon");
        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("soon"));

        env::remove_var(ENV_API_URL);
        env::remove_var(ENV_API_TIMEOUT);
    }

    #[test]
    fn test_serialization() {
        let config = ClientConfig::default().with_timeout_secs(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
