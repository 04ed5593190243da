//! TON API client.
//!
//! This module provides the unified [`TonApiClient`] for making requests to
//! the tonapi.io indexing service: typed REST calls, SSE subscriptions and
//! WebSocket subscriptions.
//!
//! # Example
//!
//! ```ignore
//! use tonapi_client::{Network, TonApiClient};
//!
//! let client = TonApiClient::builder()
//!     .api_key("YOUR_API_KEY")
//!     .network(Network::Mainnet)
//!     .build()?;
//! let account = client.get_account_info("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N").await?;
//! ```

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{Result, TonApiError};
use crate::network::Network;

mod accounts;
mod blockchain;
mod dns;
mod http;
mod jettons;
mod nft;
mod rates;
mod staking;
mod stream;
mod traces;

#[cfg(test)]
mod tests;

pub(crate) use http::Query;

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// TON API Client
// ============================================================================

/// Asynchronous client for the TON API.
///
/// Configuration is immutable per instance; cloning is cheap and clones share
/// the underlying connection pool. Build one with [`TonApiClient::new`] or
/// [`TonApiClient::builder`].
#[derive(Debug, Clone)]
pub struct TonApiClient {
    /// REST/SSE base URL, with trailing slash.
    pub(crate) base_url: String,
    /// WebSocket endpoint URL.
    pub(crate) websocket_url: String,
    /// Default headers sent with every request (bearer authorization).
    pub(crate) default_headers: HeaderMap,
    /// Whole-request timeout for REST calls. Not applied to subscriptions.
    pub(crate) timeout: Duration,
    /// Total attempts for rate-limited requests, at least 1.
    pub(crate) max_attempts: u32,
    /// HTTP client for requests.
    pub(crate) http: reqwest::Client,
}

impl TonApiClient {
    /// Creates a client for the given network with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client fails to initialize.
    pub fn new(api_key: impl Into<String>, network: Network) -> Result<Self> {
        Self::builder().api_key(api_key).network(network).build()
    }

    /// Returns a builder for customized clients.
    #[must_use]
    pub fn builder() -> TonApiClientBuilder {
        TonApiClientBuilder::default()
    }

    /// The configured REST base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured WebSocket endpoint.
    #[must_use]
    pub fn websocket_url(&self) -> &str {
        &self.websocket_url
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`TonApiClient`].
#[derive(Debug, Default, Clone)]
pub struct TonApiClientBuilder {
    api_key: Option<String>,
    network: Network,
    base_url: Option<String>,
    websocket_url: Option<String>,
    timeout: Option<Duration>,
    max_attempts: Option<u32>,
    headers: Vec<(String, String)>,
}

impl TonApiClientBuilder {
    /// Sets the bearer token used for authorization.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Selects the network (mainnet by default).
    #[must_use]
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Overrides the REST/SSE base URL. A trailing slash is appended when
    /// missing.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the WebSocket endpoint URL.
    #[must_use]
    pub fn websocket_url(mut self, websocket_url: impl Into<String>) -> Self {
        self.websocket_url = Some(websocket_url.into());
        self
    }

    /// Sets the whole-request timeout (connect + read).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the total attempt count for rate-limited requests. Values below 1
    /// are clamped to 1 (a single attempt, no retry).
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Adds a default header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`TonApiError::InvalidInput`] if the API key or an extra
    /// header is not a valid header value, and [`TonApiError::Http`] if the
    /// HTTP client fails to initialize (e.g., TLS backend unavailable).
    pub fn build(self) -> Result<TonApiClient> {
        let mut default_headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| TonApiError::invalid_input("API key is not a valid header value"))?;
            default_headers.insert(AUTHORIZATION, bearer);
        }
        for (name, value) in &self.headers {
            let name: reqwest::header::HeaderName = name
                .parse()
                .map_err(|_| TonApiError::invalid_input(format!("invalid header name '{name}'")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| TonApiError::invalid_input(format!("invalid value for header '{name}'")))?;
            default_headers.insert(name, value);
        }

        let mut base_url = self
            .base_url
            .unwrap_or_else(|| self.network.base_url().to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let websocket_url = self
            .websocket_url
            .unwrap_or_else(|| self.network.websocket_url().to_string());

        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(TonApiClient {
            base_url,
            websocket_url,
            default_headers,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_attempts: self.max_attempts.unwrap_or(1).max(1),
            http,
        })
    }
}
