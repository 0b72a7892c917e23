//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};

/// Creates the reqwest client shared by every request of one [`HttpTransport`](super::HttpTransport).
///
/// # Arguments
/// * `timeout` - Bound for a whole request, from connecting until the body is read
///
/// # Features
/// * Identifying `User-Agent` header on every request
/// * Connection pooling with a bounded idle pool per host
/// * The timeout drops the in-flight request, it does not just stop waiting for it
pub fn create_http_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
