//! Single-shot GET transport: host resolution, timeout, status classification, JSON decoding

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use super::endpoints::{ApiEndpoints, ApiRequest};
use super::http_client::create_http_client_with_timeout;
use crate::constants::DEFAULT_HTTP_TIMEOUT_MS;
use crate::error::{NhlError, Result};

/// Issues GET requests against the NHL hosts.
///
/// Configured once at construction and never mutated afterwards, so one
/// instance is shared by every resource module of a client. Each call makes
/// exactly one attempt: there is no retry, no back-off and no caching.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout_ms: u64,
    endpoints: ApiEndpoints,
}

impl HttpTransport {
    /// Creates a transport with the given timeout (milliseconds) and base URLs.
    pub fn new(timeout_ms: u64, endpoints: ApiEndpoints) -> Result<Self> {
        let client = create_http_client_with_timeout(Duration::from_millis(timeout_ms))
            .map_err(|e| NhlError::Network {
                message: format!("Failed to initialise HTTP client: {e}"),
                endpoint: None,
                source: Some(e),
            })?;

        Ok(Self {
            client,
            timeout_ms,
            endpoints,
        })
    }

    /// Transport against the public NHL hosts with the default 10 second timeout.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_HTTP_TIMEOUT_MS, ApiEndpoints::default())
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// GETs `path` from the host [`resolve_host`](super::resolve_host) picks and
    /// decodes the JSON body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(&ApiRequest::new(path)).await
    }

    /// Same as [`get`](Self::get) but returns the body as untyped JSON.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        self.get(path).await
    }

    /// Executes a prepared request.
    ///
    /// Failure mapping:
    /// - 404, 429, 500/502/503/504 and any other non-2xx status map to their
    ///   own [`NhlError`] kinds, carrying the endpoint path
    /// - a timeout maps to [`NhlError::Network`] naming the configured bound
    /// - any other transport or decoding failure maps to [`NhlError::Network`]
    ///   wrapping the reqwest error
    #[instrument(skip(self, request), fields(host = ?request.host, path = %request.path))]
    pub async fn execute<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let url = request.url(&self.endpoints);
        let endpoint = request.path.as_str();
        info!("Fetching data from URL: {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e, endpoint))?;

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            error!(
                "HTTP {} - {} (endpoint: {})",
                status_code,
                status.canonical_reason().unwrap_or("Unknown error"),
                endpoint
            );
            return Err(NhlError::from_status(status_code, endpoint));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| self.transport_error(e, endpoint))
    }

    fn transport_error(&self, e: reqwest::Error, endpoint: &str) -> NhlError {
        if e.is_timeout() {
            error!("Request to {} timed out after {}ms", endpoint, self.timeout_ms);
            NhlError::timeout(self.timeout_ms, endpoint, e)
        } else if e.is_decode() {
            error!("Failed to decode response from {}: {}", endpoint, e);
            NhlError::network(
                format!("Failed to decode response from {endpoint}: {e}"),
                endpoint,
                Some(e),
            )
        } else {
            error!("Request failed for {}: {}", endpoint, e);
            NhlError::network(format!("Network error: {e}"), endpoint, Some(e))
        }
    }
}
