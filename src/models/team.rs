use super::common::LocalizedString;
use serde::{Deserialize, Serialize};

/// Response of `/roster/:team/:season`, grouped by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<RosterPlayer>,
    #[serde(default)]
    pub defensemen: Vec<RosterPlayer>,
    #[serde(default)]
    pub goalies: Vec<RosterPlayer>,
}

impl RosterResponse {
    /// All players regardless of position group.
    pub fn players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.forwards
            .iter()
            .chain(self.defensemen.iter())
            .chain(self.goalies.iter())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: i64,
    #[serde(default)]
    pub headshot: Option<String>,
    #[serde(default)]
    pub first_name: Option<LocalizedString>,
    #[serde(default)]
    pub last_name: Option<LocalizedString>,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub position_code: Option<String>,
    #[serde(default)]
    pub shoots_catches: Option<String>,
    #[serde(default)]
    pub height_in_inches: Option<i32>,
    #[serde(default)]
    pub weight_in_pounds: Option<i32>,
    #[serde(default)]
    pub height_in_centimeters: Option<i32>,
    #[serde(default)]
    pub weight_in_kilograms: Option<i32>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub birth_city: Option<LocalizedString>,
    #[serde(default)]
    pub birth_country: Option<String>,
    #[serde(default)]
    pub birth_state_province: Option<LocalizedString>,
}

/// Response of `/club-stats-season/:team`. Every field is optional since the
/// payload varies between seasons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsResponse {
    #[serde(default)]
    pub season_id: Option<u32>,
    #[serde(default)]
    pub games_played: Option<i32>,
    #[serde(default)]
    pub wins: Option<i32>,
    #[serde(default)]
    pub losses: Option<i32>,
    #[serde(default)]
    pub ot_losses: Option<i32>,
    #[serde(default)]
    pub pts: Option<i32>,
    #[serde(default)]
    pub pt_pctg: Option<f64>,
    #[serde(default)]
    pub goals_for: Option<i32>,
    #[serde(default)]
    pub goals_for_per_game: Option<f64>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub goals_against_per_game: Option<f64>,
    #[serde(rename = "evGGARatio", default)]
    pub ev_gga_ratio: Option<f64>,
    #[serde(default)]
    pub power_play_pct: Option<f64>,
    #[serde(default)]
    pub power_play_goals: Option<i32>,
    #[serde(default)]
    pub power_play_goals_against: Option<i32>,
    #[serde(default)]
    pub power_play_opportunities: Option<i32>,
    #[serde(default)]
    pub penalty_kill_pct: Option<f64>,
    #[serde(default)]
    pub shots_for_per_game: Option<f64>,
    #[serde(default)]
    pub shots_against_per_game: Option<f64>,
    #[serde(default)]
    pub win_score_first: Option<f64>,
    #[serde(default)]
    pub win_opp_score_first: Option<f64>,
    #[serde(default)]
    pub win_lead_first_per: Option<f64>,
    #[serde(default)]
    pub win_lead_second_per: Option<f64>,
    #[serde(default)]
    pub win_outshoot_opp: Option<f64>,
    #[serde(default)]
    pub win_outshot_by_opp: Option<f64>,
    #[serde(default)]
    pub faceoff_win_pct: Option<f64>,
    #[serde(default)]
    pub shooting_pct: Option<f64>,
    #[serde(default)]
    pub save_pct: Option<f64>,
}
