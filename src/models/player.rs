use super::common::{FlexibleId, LocalizedString};
use serde::{Deserialize, Serialize};

/// One hit from the player search service. The service returns a bare JSON
/// array of these, with ids encoded as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    pub player_id: FlexibleId,
    pub name: String,
    #[serde(default)]
    pub position_code: Option<String>,
    #[serde(default)]
    pub team_id: Option<FlexibleId>,
    #[serde(default)]
    pub team_abbrev: Option<String>,
    #[serde(default)]
    pub last_team_id: Option<FlexibleId>,
    #[serde(default)]
    pub last_team_abbrev: Option<String>,
    #[serde(default)]
    pub last_season_id: Option<FlexibleId>,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub height_in_inches: Option<i32>,
    #[serde(default)]
    pub height_in_centimeters: Option<i32>,
    #[serde(default)]
    pub weight_in_pounds: Option<i32>,
    #[serde(default)]
    pub weight_in_kilograms: Option<i32>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub birth_city: Option<String>,
    #[serde(default)]
    pub birth_state_province: Option<String>,
    #[serde(default)]
    pub birth_country: Option<String>,
}

/// Response of `/player/:playerId/landing`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub current_team_id: Option<i64>,
    #[serde(default)]
    pub current_team_abbrev: Option<String>,
    #[serde(default)]
    pub full_team_name: Option<LocalizedString>,
    #[serde(default)]
    pub first_name: Option<LocalizedString>,
    #[serde(default)]
    pub last_name: Option<LocalizedString>,
    #[serde(default)]
    pub team_logo: Option<String>,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub height_in_inches: Option<i32>,
    #[serde(default)]
    pub height_in_centimeters: Option<i32>,
    #[serde(default)]
    pub weight_in_pounds: Option<i32>,
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
    #[serde(default)]
    pub shoots_catches: Option<String>,
    #[serde(default)]
    pub draft_details: Option<DraftDetails>,
    #[serde(default)]
    pub player_slug: Option<String>,
    #[serde(default)]
    pub in_top100_all_time: Option<i32>,
    #[serde(rename = "inHHOF", default)]
    pub in_hhof: Option<i32>,
    #[serde(default)]
    pub featured_stats: Option<FeaturedStats>,
    #[serde(default)]
    pub career_totals: Option<CareerTotals>,
    #[serde(default)]
    pub shop_link: Option<String>,
    #[serde(default)]
    pub twitter_link: Option<String>,
    #[serde(default)]
    pub watch_link: Option<String>,
    #[serde(rename = "last5Games", default)]
    pub last_five_games: Vec<RecentGame>,
    #[serde(default)]
    pub season_totals: Vec<SeasonTotals>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub current_team_roster: Vec<TeamRosterPlayer>,
}

impl PlayerStatsResponse {
    /// "First Last" when both names are present.
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDetails {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub team_abbrev: Option<String>,
    #[serde(default)]
    pub round: Option<i32>,
    #[serde(default)]
    pub pick_in_round: Option<i32>,
    #[serde(default)]
    pub overall_pick: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStats {
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub regular_season: Option<FeaturedSeason>,
    #[serde(default)]
    pub playoffs: Option<FeaturedSeason>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSeason {
    #[serde(default)]
    pub sub_season: Option<StatLine>,
    #[serde(default)]
    pub career: Option<StatLine>,
}

/// Counting stats shared by season, career and featured views. Skater and
/// goalie fields are mixed; whichever do not apply are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    #[serde(default)]
    pub games_played: Option<i32>,
    #[serde(default)]
    pub goals: Option<i32>,
    #[serde(default)]
    pub assists: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub plus_minus: Option<i32>,
    #[serde(default)]
    pub pim: Option<i32>,
    #[serde(default)]
    pub game_winning_goals: Option<i32>,
    #[serde(default)]
    pub ot_goals: Option<i32>,
    #[serde(default)]
    pub shots: Option<i32>,
    #[serde(default)]
    pub shooting_pctg: Option<f64>,
    #[serde(default)]
    pub power_play_goals: Option<i32>,
    #[serde(default)]
    pub power_play_points: Option<i32>,
    #[serde(default)]
    pub shorthanded_goals: Option<i32>,
    #[serde(default)]
    pub shorthanded_points: Option<i32>,
    #[serde(default)]
    pub wins: Option<i32>,
    #[serde(default)]
    pub losses: Option<i32>,
    #[serde(default)]
    pub ot_losses: Option<i32>,
    #[serde(default)]
    pub shots_against: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub goals_against_avg: Option<f64>,
    #[serde(default)]
    pub save_pctg: Option<f64>,
    #[serde(default)]
    pub shutouts: Option<i32>,
    #[serde(default)]
    pub time_on_ice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTotals {
    #[serde(default)]
    pub regular_season: Option<StatLine>,
    #[serde(default)]
    pub playoffs: Option<StatLine>,
}

/// Entry of the landing page's last-five-games list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGame {
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub home_road_flag: Option<String>,
    #[serde(default)]
    pub opponent_abbrev: Option<String>,
    #[serde(default)]
    pub team_abbrev: Option<String>,
    #[serde(default)]
    pub goals: Option<i32>,
    #[serde(default)]
    pub assists: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub plus_minus: Option<i32>,
    #[serde(default)]
    pub power_play_goals: Option<i32>,
    #[serde(default)]
    pub shots: Option<i32>,
    #[serde(default)]
    pub pim: Option<i32>,
    #[serde(default)]
    pub toi: Option<String>,
    #[serde(default)]
    pub game_winning_goals: Option<i32>,
    #[serde(default)]
    pub ot_goals: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub goals_against_average: Option<f64>,
    #[serde(default)]
    pub save_pctg: Option<f64>,
    #[serde(default)]
    pub shots_against: Option<i32>,
    #[serde(default)]
    pub saves: Option<i32>,
    #[serde(default)]
    pub decision: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub game_type_id: Option<i32>,
    #[serde(default)]
    pub league_abbrev: Option<String>,
    #[serde(default)]
    pub team_name: Option<LocalizedString>,
    #[serde(default)]
    pub sequence: Option<i32>,
    #[serde(default)]
    pub games_played: Option<i32>,
    #[serde(default)]
    pub goals: Option<i32>,
    #[serde(default)]
    pub assists: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub plus_minus: Option<i32>,
    #[serde(default)]
    pub pim: Option<i32>,
    #[serde(default)]
    pub game_winning_goals: Option<i32>,
    #[serde(default)]
    pub power_play_goals: Option<i32>,
    #[serde(default)]
    pub shots: Option<i32>,
    #[serde(default)]
    pub shooting_pctg: Option<f64>,
    #[serde(default)]
    pub avg_toi: Option<String>,
    #[serde(default)]
    pub faceoff_winning_pctg: Option<f64>,
    #[serde(default)]
    pub wins: Option<i32>,
    #[serde(default)]
    pub losses: Option<i32>,
    #[serde(default)]
    pub ties: Option<i32>,
    #[serde(default)]
    pub ot_losses: Option<i32>,
    #[serde(default)]
    pub shots_against: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub goals_against_avg: Option<f64>,
    #[serde(default)]
    pub save_pctg: Option<f64>,
    #[serde(default)]
    pub shutouts: Option<i32>,
    #[serde(default)]
    pub time_on_ice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Award {
    #[serde(default)]
    pub trophy: Option<LocalizedString>,
    #[serde(default)]
    pub seasons: Vec<AwardSeason>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardSeason {
    #[serde(default)]
    pub season_id: Option<u32>,
    #[serde(default)]
    pub games_played: Option<i32>,
    #[serde(default)]
    pub game_type_id: Option<i32>,
    #[serde(default)]
    pub goals: Option<i32>,
    #[serde(default)]
    pub assists: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub plus_minus: Option<i32>,
    #[serde(default)]
    pub hits: Option<i32>,
    #[serde(default)]
    pub blocked_shots: Option<i32>,
    #[serde(default)]
    pub pim: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRosterPlayer {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<LocalizedString>,
    #[serde(default)]
    pub last_name: Option<LocalizedString>,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub position_code: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}
