use thiserror::Error;

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, NhlError>;

/// Every failure the client can surface.
///
/// Validation failures are raised before any request leaves the process.
/// HTTP failures are classified once, at the transport boundary, and are
/// never wrapped a second time.
#[derive(Debug, Error)]
pub enum NhlError {
    // Transport-level failures: timeouts, refused connections, unreadable bodies
    #[error("{message}")]
    Network {
        message: String,
        endpoint: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("{message}")]
    NotFound { message: String, endpoint: String },

    // Caller input rejected locally
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    RateLimit { message: String, endpoint: String },

    // 500, 502, 503 and 504
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        endpoint: String,
    },

    // Any other non-2xx status
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        endpoint: String,
    },
}

/// Coarse classification of an [`NhlError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    NotFound,
    Validation,
    RateLimit,
    Server,
    Http,
}

impl NhlError {
    /// Create a validation error for rejected caller input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error, optionally wrapping the transport error that caused it
    pub fn network(
        message: impl Into<String>,
        endpoint: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            endpoint: Some(endpoint.into()),
            source,
        }
    }

    /// Create a network timeout error that names the configured bound
    pub fn timeout(timeout_ms: u64, endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::network(
            format!("Request timeout after {timeout_ms}ms"),
            endpoint,
            Some(source),
        )
    }

    /// Create a not found error (404)
    pub fn not_found(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::NotFound {
            message: format!("Resource not found at endpoint: {endpoint}"),
            endpoint,
        }
    }

    /// Create a rate limit error (429)
    pub fn rate_limit(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::RateLimit {
            message: format!(
                "Rate limit exceeded at endpoint: {endpoint}. Please slow down your requests."
            ),
            endpoint,
        }
    }

    /// Create a server error (500, 502, 503, 504)
    pub fn server(status: u16, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::Server {
            status,
            message: format!(
                "NHL API server error ({status}) at endpoint: {endpoint}. Please try again later."
            ),
            endpoint,
        }
    }

    /// Create an unclassified HTTP error for any other non-success status
    pub fn http(status: u16, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::Http {
            status,
            message: format!("HTTP error {status} at endpoint: {endpoint}"),
            endpoint,
        }
    }

    /// Classify a non-success HTTP status for the given endpoint path.
    pub fn from_status(status: u16, endpoint: impl Into<String>) -> Self {
        match status {
            404 => Self::not_found(endpoint),
            429 => Self::rate_limit(endpoint),
            500 | 502 | 503 | 504 => Self::server(status, endpoint),
            _ => Self::http(status, endpoint),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NhlError::Network { .. } => ErrorKind::Network,
            NhlError::NotFound { .. } => ErrorKind::NotFound,
            NhlError::Validation { .. } => ErrorKind::Validation,
            NhlError::RateLimit { .. } => ErrorKind::RateLimit,
            NhlError::Server { .. } => ErrorKind::Server,
            NhlError::Http { .. } => ErrorKind::Http,
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            NhlError::Network { message, .. }
            | NhlError::NotFound { message, .. }
            | NhlError::Validation { message }
            | NhlError::RateLimit { message, .. }
            | NhlError::Server { message, .. }
            | NhlError::Http { message, .. } => message,
        }
    }

    /// HTTP status code, when the failure came from a completed response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NhlError::NotFound { .. } => Some(404),
            NhlError::RateLimit { .. } => Some(429),
            NhlError::Server { status, .. } | NhlError::Http { status, .. } => Some(*status),
            NhlError::Network { .. } | NhlError::Validation { .. } => None,
        }
    }

    /// Endpoint path the failing request targeted, e.g. `/score/now`.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            NhlError::Network { endpoint, .. } => endpoint.as_deref(),
            NhlError::NotFound { endpoint, .. }
            | NhlError::RateLimit { endpoint, .. }
            | NhlError::Server { endpoint, .. }
            | NhlError::Http { endpoint, .. } => Some(endpoint),
            NhlError::Validation { .. } => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, NhlError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NhlError::NotFound { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, NhlError::Network { .. })
    }

    /// Check if re-sending the same request could succeed later.
    /// The client never retries on its own; this is advice for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NhlError::Network { .. } | NhlError::RateLimit { .. } | NhlError::Server { .. }
        )
    }
}

/// Errors of the `nhl` command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] NhlError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl CliError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_helper() {
        let error = NhlError::validation("Team abbreviation is required");
        assert!(matches!(error, NhlError::Validation { .. }));
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.to_string(), "Team abbreviation is required");
        assert_eq!(error.status_code(), None);
        assert_eq!(error.endpoint(), None);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_not_found_helper() {
        let error = NhlError::not_found("/player/8478402/landing");
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.endpoint(), Some("/player/8478402/landing"));
        assert_eq!(
            error.to_string(),
            "Resource not found at endpoint: /player/8478402/landing"
        );
    }

    #[test]
    fn test_rate_limit_helper() {
        let error = NhlError::rate_limit("/score/now");
        assert_eq!(error.kind(), ErrorKind::RateLimit);
        assert_eq!(error.status_code(), Some(429));
        assert!(error.message().contains("/score/now"));
    }

    #[test]
    fn test_server_helper_keeps_exact_status() {
        let error = NhlError::server(503, "/standings/now");
        assert_eq!(error.kind(), ErrorKind::Server);
        assert_eq!(error.status_code(), Some(503));
        assert!(error.to_string().contains("503"));
        assert!(error.to_string().contains("/standings/now"));
    }

    #[test]
    fn test_from_status_classification() {
        assert_eq!(NhlError::from_status(404, "/x").kind(), ErrorKind::NotFound);
        assert_eq!(NhlError::from_status(429, "/x").kind(), ErrorKind::RateLimit);
        for status in [500, 502, 503, 504] {
            let error = NhlError::from_status(status, "/x");
            assert_eq!(error.kind(), ErrorKind::Server, "status {status}");
            assert_eq!(error.status_code(), Some(status));
        }
        for status in [400, 401, 403, 418, 501, 505, 302] {
            let error = NhlError::from_status(status, "/x");
            assert_eq!(error.kind(), ErrorKind::Http, "status {status}");
            assert_eq!(error.status_code(), Some(status));
            assert!(error.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn test_network_error_wraps_reqwest_error() {
        let client = reqwest::Client::new();
        let reqwest_error = client
            .get("not a valid url")
            .build()
            .expect_err("Expected an error from invalid URL");

        let error = NhlError::network("Network error: bad url", "/score/now", Some(reqwest_error));
        assert_eq!(error.kind(), ErrorKind::Network);
        assert_eq!(error.status_code(), None);
        assert_eq!(error.endpoint(), Some("/score/now"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_is_retryable() {
        assert!(NhlError::network("down", "/x", None).is_retryable());
        assert!(NhlError::rate_limit("/x").is_retryable());
        assert!(NhlError::server(500, "/x").is_retryable());

        assert!(!NhlError::not_found("/x").is_retryable());
        assert!(!NhlError::http(400, "/x").is_retryable());
        assert!(!NhlError::validation("bad").is_retryable());
    }

    #[test]
    fn test_cli_error_from_api_error_is_transparent() {
        let error: CliError = NhlError::validation("Invalid game ID: 0").into();
        assert!(matches!(error, CliError::Api(_)));
        assert_eq!(error.to_string(), "Invalid game ID: 0");
    }

    #[test]
    fn test_cli_error_helpers() {
        assert_eq!(
            CliError::config_error("timeout must be positive").to_string(),
            "Configuration error: timeout must be positive"
        );
        assert_eq!(
            CliError::log_setup_error("no directory").to_string(),
            "Log setup error: no directory"
        );
    }
}
