//! The HTTP client used by every resource in the hierarchy.

use crate::client::ClientConfig;
use crate::error::Result;
use crate::types::CouchResponse;
use bytes::Bytes;
use reqwest::Method;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// HTTP transport shared by a [`Node`](crate::Node) and its descendants.
///
/// Wraps `reqwest::Client`, so cloning is cheap and clones share the same
/// connection state. Each verb helper performs a single round trip and
/// returns the collected [`CouchResponse`] whatever the status code;
/// classifying statuses is the resource layer's job.
#[derive(Clone)]
pub struct CouchClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl CouchClient {
    /// Create a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_secs(config.connection_timeout_secs));

        let client = builder.build().unwrap_or_default();

        CouchClient {
            client,
            config: Arc::new(config),
        }
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        CouchClient {
            client,
            config: Arc::new(ClientConfig::default()),
        }
    }

    /// The underlying `reqwest` client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a PUT with the given body and headers.
    pub async fn put(
        &self,
        url: &str,
        body: impl Into<Bytes>,
        headers: &[(&str, &str)],
    ) -> Result<CouchResponse> {
        self.execute(Method::PUT, url, Some(body.into()), headers)
            .await
    }

    /// Issue a POST with the given body and headers.
    pub async fn post(
        &self,
        url: &str,
        body: impl Into<Bytes>,
        headers: &[(&str, &str)],
    ) -> Result<CouchResponse> {
        self.execute(Method::POST, url, Some(body.into()), headers)
            .await
    }

    /// Issue a DELETE with the given headers.
    pub async fn delete(&self, url: &str, headers: &[(&str, &str)]) -> Result<CouchResponse> {
        self.execute(Method::DELETE, url, None, headers).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
        headers: &[(&str, &str)],
    ) -> Result<CouchResponse> {
        let mut req_builder = self.client.request(method.clone(), url);

        for (name, value) in headers {
            req_builder = req_builder.header(*name, *value);
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();

        let mut collected = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                collected.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response.bytes().await?;

        tracing::debug!(method = %method, url, status, "request complete");

        Ok(CouchResponse {
            status,
            headers: collected,
            body,
        })
    }
}

impl Default for CouchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CouchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouchClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
