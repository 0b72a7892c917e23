use std::sync::Arc;
use tracing::debug;

use crate::api::{HttpTransport, roster_path, team_stats_path};
use crate::error::Result;
use crate::models::{RosterResponse, TeamStatsResponse};
use crate::utils::{current_season_id, normalize_team_abbr};

/// Rosters and club statistics.
#[derive(Debug, Clone)]
pub struct TeamsApi {
    transport: Arc<HttpTransport>,
}

impl TeamsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Queries for one team, e.g. `client.teams.get("TOR").roster(None)`.
    pub fn get<'a>(&'a self, team: &'a str) -> TeamQuery<'a> {
        TeamQuery {
            transport: self.transport.as_ref(),
            team,
        }
    }
}

/// Builder returned by [`TeamsApi::get`].
#[derive(Debug, Clone, Copy)]
pub struct TeamQuery<'a> {
    transport: &'a HttpTransport,
    team: &'a str,
}

impl TeamQuery<'_> {
    /// Roster for `season` (e.g. `20242025`), or for the current season when `None`.
    pub async fn roster(&self, season: Option<u32>) -> Result<RosterResponse> {
        let team = normalize_team_abbr(self.team)?;
        let season = season.unwrap_or_else(current_season_id);
        debug!("Fetching {team} roster for season {season}");
        self.transport.get(&roster_path(team, season)).await
    }

    pub async fn stats(&self) -> Result<TeamStatsResponse> {
        let team = normalize_team_abbr(self.team)?;
        self.transport.get(&team_stats_path(team)).await
    }
}
