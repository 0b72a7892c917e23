use std::sync::Arc;
use tracing::{debug, instrument};

use crate::api::{
    HttpTransport, SCHEDULE_NOW, schedule_date_path, team_month_schedule_path,
    team_season_schedule_path, team_week_schedule_path,
};
use crate::error::Result;
use crate::models::{ScheduleGame, ScheduleResponse, TeamScheduleResponse};
use crate::utils::{DateInput, format_date, normalize_team_abbr};

/// League and team schedules.
#[derive(Debug, Clone)]
pub struct ScheduleApi {
    transport: Arc<HttpTransport>,
}

impl ScheduleApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Games of the first day in the current schedule week.
    ///
    /// Returns an empty list when the API reports no days at all, e.g. during
    /// the off-season.
    #[instrument(skip(self))]
    pub async fn today(&self) -> Result<Vec<ScheduleGame>> {
        let response: ScheduleResponse = self.transport.get(SCHEDULE_NOW).await?;
        let games = response
            .game_week
            .into_iter()
            .next()
            .map(|day| day.games)
            .unwrap_or_default();
        debug!("Found {} games for today", games.len());
        Ok(games)
    }

    /// The schedule week containing `date`.
    ///
    /// Accepts a `YYYY-MM-DD` string or a chrono date value.
    ///
    /// # Example
    /// ```no_run
    /// # async fn run() -> nhl_api::Result<()> {
    /// let client = nhl_api::NhlClient::new()?;
    /// let week = client.schedule.get_date("2025-01-15").await?;
    /// println!("{} days", week.game_week.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_date(&self, date: impl Into<DateInput>) -> Result<ScheduleResponse> {
        let date = format_date(date)?;
        debug!("Fetching schedule for {date}");
        self.transport.get(&schedule_date_path(&date)).await
    }

    /// Schedule queries for one team. The code is checked when a query runs.
    pub fn team<'a>(&'a self, team: &'a str) -> TeamSchedule<'a> {
        TeamSchedule {
            transport: self.transport.as_ref(),
            team,
        }
    }
}

/// Builder returned by [`ScheduleApi::team`].
#[derive(Debug, Clone, Copy)]
pub struct TeamSchedule<'a> {
    transport: &'a HttpTransport,
    team: &'a str,
}

impl TeamSchedule<'_> {
    /// Full-season schedule.
    pub async fn season(&self) -> Result<TeamScheduleResponse> {
        let team = normalize_team_abbr(self.team)?;
        self.transport.get(&team_season_schedule_path(team)).await
    }

    /// Current week.
    pub async fn week(&self) -> Result<TeamScheduleResponse> {
        let team = normalize_team_abbr(self.team)?;
        self.transport.get(&team_week_schedule_path(team)).await
    }

    /// Current month.
    pub async fn month(&self) -> Result<TeamScheduleResponse> {
        let team = normalize_team_abbr(self.team)?;
        self.transport.get(&team_month_schedule_path(team)).await
    }
}
