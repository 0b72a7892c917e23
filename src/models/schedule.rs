use super::common::{LocalizedString, TeamWithScore, TvBroadcast};
use serde::{Deserialize, Serialize};

/// Response of `/schedule/now` and `/schedule/:date`: one week of games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default)]
    pub next_start_date: Option<String>,
    #[serde(default)]
    pub previous_start_date: Option<String>,
    #[serde(default)]
    pub game_week: Vec<GameWeek>,
    #[serde(default)]
    pub pre_season_start_date: Option<String>,
    #[serde(default)]
    pub regular_season_start_date: Option<String>,
    #[serde(default)]
    pub regular_season_end_date: Option<String>,
    #[serde(default)]
    pub playoff_end_date: Option<String>,
    #[serde(default)]
    pub number_of_games: Option<i32>,
}

/// Games of a single day within a schedule week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWeek {
    /// YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub day_abbrev: Option<String>,
    #[serde(default)]
    pub number_of_games: i32,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    pub id: i64,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub game_type: Option<i32>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub venue: Option<LocalizedString>,
    #[serde(default)]
    pub neutral_site: Option<bool>,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: Option<String>,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: Option<String>,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: Option<String>,
    #[serde(default)]
    pub venue_timezone: Option<String>,
    #[serde(default)]
    pub game_state: Option<String>,
    #[serde(default)]
    pub game_schedule_state: Option<String>,
    #[serde(default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    pub away_team: TeamWithScore,
    pub home_team: TeamWithScore,
    #[serde(default)]
    pub game_outcome: Option<GameOutcome>,
    #[serde(default)]
    pub winning_goalie: Option<PlayerSummary>,
    #[serde(default)]
    pub winning_goal_scorer: Option<PlayerSummary>,
    #[serde(default)]
    pub special_event: Option<serde_json::Value>,
    #[serde(default)]
    pub game_center_link: Option<String>,
    #[serde(default)]
    pub tickets_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    #[serde(default)]
    pub last_period_type: Option<String>,
    #[serde(default)]
    pub ot_periods: Option<i32>,
}

/// Winning goalie or goal scorer attached to a finished game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player_id: i64,
    #[serde(default)]
    pub first_initial: Option<LocalizedString>,
    #[serde(default)]
    pub last_name: Option<LocalizedString>,
}

/// Response of the `/club-schedule*` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScheduleResponse {
    #[serde(default)]
    pub previous_season: Option<u32>,
    #[serde(default)]
    pub current_season: Option<u32>,
    #[serde(default)]
    pub club_timezone: Option<String>,
    #[serde(rename = "clubUTCOffset", default)]
    pub club_utc_offset: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}
