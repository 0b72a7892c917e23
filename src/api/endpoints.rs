//! Endpoint resolution and path building for the NHL API hosts

use crate::constants::{hosts, search};

/// The upstream service a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiHost {
    /// General web API (`api-web.nhle.com`)
    Web,
    /// Statistics REST API (`api.nhle.com/stats`)
    Stats,
    /// Player search service (`search.d3.nhle.com`)
    Search,
}

/// Base URLs for each [`ApiHost`].
///
/// The defaults point at the public NHL services. Overriding them is how the
/// client is aimed at a mirror or a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub web: String,
    pub stats: String,
    pub search: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            web: hosts::NHL_WEB.to_string(),
            stats: hosts::NHL_STATS.to_string(),
            search: hosts::NHL_SEARCH.to_string(),
        }
    }
}

impl ApiEndpoints {
    /// Routes every host to the same base URL.
    ///
    /// # Example
    /// ```
    /// use nhl_api::api::{ApiEndpoints, ApiHost};
    ///
    /// let endpoints = ApiEndpoints::single("http://127.0.0.1:8080");
    /// assert_eq!(endpoints.base_url(ApiHost::Search), "http://127.0.0.1:8080");
    /// ```
    pub fn single(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            web: base_url.clone(),
            stats: base_url.clone(),
            search: base_url,
        }
    }

    pub fn base_url(&self, host: ApiHost) -> &str {
        let base = match host {
            ApiHost::Web => &self.web,
            ApiHost::Stats => &self.stats,
            ApiHost::Search => &self.search,
        };
        base.trim_end_matches('/')
    }
}

/// Picks the host that serves a request path.
///
/// Player search lives on its own service; every other path the client
/// builds is served by the general web API.
///
/// # Example
/// ```
/// use nhl_api::api::{resolve_host, ApiHost};
///
/// assert_eq!(resolve_host("/search/player?q=mcdavid"), ApiHost::Search);
/// assert_eq!(resolve_host("/score/now"), ApiHost::Web);
/// ```
pub fn resolve_host(path: &str) -> ApiHost {
    if path.contains(PLAYER_SEARCH) {
        ApiHost::Search
    } else {
        ApiHost::Web
    }
}

/// A single GET request: which host, which path. There is never a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub host: ApiHost,
    pub path: String,
}

impl ApiRequest {
    /// Builds a request whose host is picked by [`resolve_host`].
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            host: resolve_host(&path),
            path,
        }
    }

    /// Builds a request for an explicitly chosen host, e.g. [`ApiHost::Stats`].
    pub fn with_host(host: ApiHost, path: impl Into<String>) -> Self {
        Self {
            host,
            path: path.into(),
        }
    }

    /// Full URL of this request against the given endpoints.
    pub fn url(&self, endpoints: &ApiEndpoints) -> String {
        format!("{}{}", endpoints.base_url(self.host), self.path)
    }
}

pub const SCHEDULE_NOW: &str = "/schedule/now";
pub const SCORE_NOW: &str = "/score/now";
pub const STANDINGS_NOW: &str = "/standings/now";
pub const STANDINGS_SEASON: &str = "/standings-season";
pub const PLAYER_SEARCH: &str = "/search/player";

/// `/schedule/:date`
pub fn schedule_date_path(date: &str) -> String {
    format!("/schedule/{date}")
}

/// `/club-schedule-season/:team/now`
pub fn team_season_schedule_path(team: &str) -> String {
    format!("/club-schedule-season/{team}/now")
}

/// `/club-schedule/:team/week/now`
pub fn team_week_schedule_path(team: &str) -> String {
    format!("/club-schedule/{team}/week/now")
}

/// `/club-schedule/:team/month/now`
pub fn team_month_schedule_path(team: &str) -> String {
    format!("/club-schedule/{team}/month/now")
}

/// `/gamecenter/:gameId/boxscore`
pub fn boxscore_path(game_id: i64) -> String {
    format!("/gamecenter/{game_id}/boxscore")
}

/// `/gamecenter/:gameId/play-by-play`
pub fn play_by_play_path(game_id: i64) -> String {
    format!("/gamecenter/{game_id}/play-by-play")
}

/// `/roster/:team/:season`
pub fn roster_path(team: &str, season_id: u32) -> String {
    format!("/roster/{team}/{season_id}")
}

/// `/club-stats-season/:team`
pub fn team_stats_path(team: &str) -> String {
    format!("/club-stats-season/{team}")
}

/// `/player/:playerId/landing`
pub fn player_landing_path(player_id: i64) -> String {
    format!("/player/{player_id}/landing")
}

/// Builds the player search path. `query` is URL-encoded here, so callers
/// pass the plain (already trimmed) search term.
///
/// # Example
/// ```
/// use nhl_api::api::player_search_path;
///
/// let path = player_search_path("Connor McDavid", 10, true);
/// assert_eq!(
///     path,
///     "/search/player?culture=en-us&limit=10&q=Connor%20McDavid&active=true"
/// );
/// ```
pub fn player_search_path(query: &str, limit: u32, active: bool) -> String {
    let encoded = urlencoding::encode(query);
    format!(
        "{PLAYER_SEARCH}?culture={}&limit={limit}&q={encoded}&active={active}",
        search::CULTURE
    )
}
