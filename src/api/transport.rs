//! Transport trait and the HTTP implementation.
//!
//! `Transport` moves a JSON body to a path and returns the raw response
//! body. Envelope decoding happens one level up in `ApiClient`, so any
//! transport (HTTP, a test double) gets the same error mapping.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// HTTP verb used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Request/response transport.
///
/// ## Implementation Notes
///
/// - Return the body for every HTTP status; the envelope decides success
/// - Map connection, timeout and body-read failures to `DeckError::Transport`
/// - Do not retry
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the response body.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<String>;
}

#[cfg(feature = "http")]
pub use self::http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;
    use tracing::{debug, error};

    use super::{Method, Transport};
    use crate::api::config::ClientConfig;
    use crate::error::Result;

    /// `reqwest`-backed transport.
    #[derive(Clone, Debug)]
    pub struct HttpTransport {
        client: Client,
        config: ClientConfig,
    }

    impl HttpTransport {
        /// Create a transport from configuration.
        pub fn new(config: ClientConfig) -> Result<Self> {
            let mut builder = Client::builder()
                .user_agent(config.user_agent.clone())
                .cookie_store(config.cookie_store);
            if config.timeout_secs > 0 {
                builder = builder.timeout(Duration::from_secs(config.timeout_secs));
            }
            let client = builder.build()?;
            Ok(Self { client, config })
        }

        /// Active configuration.
        #[must_use]
        pub fn config(&self) -> &ClientConfig {
            &self.config
        }
    }

    #[async_trait]
    impl Transport for HttpTransport {
        async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<String> {
            let url = self.config.url(path);
            debug!(%method, %url, "dispatching request");

            let mut request = match method {
                Method::Get => self.client.get(&url),
                Method::Post => self.client.post(&url),
                Method::Put => self.client.put(&url),
                Method::Delete => self.client.delete(&url),
            };
            if let Some(body) = &body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(|e| {
                error!(%method, %url, error = %e, "request failed");
                e
            })?;

            let status = response.status();
            let text = response.text().await.map_err(|e| {
                error!(%method, %url, %status, error = %e, "failed to read response body");
                e
            })?;
            debug!(%method, %url, %status, bytes = text.len(), "response received");

            Ok(text)
        }
    }
}
