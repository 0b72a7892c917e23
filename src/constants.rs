//! Crate-wide constants: API hosts, request defaults and environment variable names.

/// Default timeout for HTTP requests in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Value sent in the `User-Agent` header of every request
pub const USER_AGENT: &str = concat!("nhl-api-client/", env!("CARGO_PKG_VERSION"));

/// Base URLs of the upstream NHL services
pub mod hosts {
    /// General web API: schedules, scores, game center, rosters, standings
    pub const NHL_WEB: &str = "https://api-web.nhle.com/v1";

    /// Statistics REST API
    pub const NHL_STATS: &str = "https://api.nhle.com/stats/rest/en";

    /// Player search service
    pub const NHL_SEARCH: &str = "https://search.d3.nhle.com/api/v1";
}

/// Player search defaults
pub mod search {
    /// Number of results requested when no limit is given
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Locale sent with every search request
    pub const CULTURE: &str = "en-us";
}

/// Accepted decimal digit counts for numeric identifiers
pub mod id_digits {
    pub const GAME_ID_MIN: usize = 8;
    pub const GAME_ID_MAX: usize = 10;
    pub const PLAYER_ID_MIN: usize = 6;
    pub const PLAYER_ID_MAX: usize = 8;
}

/// Environment variable names read by the command-line front end
pub mod env_vars {
    /// Override for the HTTP timeout in milliseconds
    pub const HTTP_TIMEOUT_MS: &str = "NHL_API_HTTP_TIMEOUT_MS";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NHL_API_LOG_FILE";
}

/// Name of the per-user directory holding the config file and logs
pub const APP_DIR_NAME: &str = "nhl_api";

/// File name used for logs when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "nhl_api.log";

/// Upper bound accepted for a configured HTTP timeout (5 minutes)
pub const MAX_HTTP_TIMEOUT_MS: u64 = 300_000;
