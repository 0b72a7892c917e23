use super::common::LocalizedString;
use serde::{Deserialize, Serialize};

/// Response of `/standings/now`: one row per team, league-wide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    #[serde(default)]
    pub wild_card_indicator: Option<bool>,
    #[serde(default)]
    pub standings: Vec<StandingsEntry>,
}

impl StandingsResponse {
    /// Rows of one division, in the order the API returned them.
    pub fn division<'a>(
        &'a self,
        division_abbrev: &'a str,
    ) -> impl Iterator<Item = &'a StandingsEntry> {
        self.standings
            .iter()
            .filter(move |row| row.division_abbrev.as_deref() == Some(division_abbrev))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    #[serde(default)]
    pub season_id: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub conference_abbrev: Option<String>,
    #[serde(default)]
    pub conference_name: Option<String>,
    #[serde(default)]
    pub division_abbrev: Option<String>,
    #[serde(default)]
    pub division_name: Option<String>,
    #[serde(default)]
    pub team_abbrev: Option<LocalizedString>,
    #[serde(default)]
    pub team_name: Option<LocalizedString>,
    #[serde(default)]
    pub team_common_name: Option<LocalizedString>,
    #[serde(default)]
    pub place_name: Option<LocalizedString>,
    #[serde(default)]
    pub team_logo: Option<String>,
    #[serde(default)]
    pub games_played: Option<i32>,
    #[serde(default)]
    pub wins: Option<i32>,
    #[serde(default)]
    pub losses: Option<i32>,
    #[serde(default)]
    pub ot_losses: Option<i32>,
    #[serde(default)]
    pub ties: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub point_pctg: Option<f64>,
    #[serde(default)]
    pub regulation_wins: Option<i32>,
    #[serde(default)]
    pub regulation_plus_ot_wins: Option<i32>,
    #[serde(default)]
    pub goal_for: Option<i32>,
    #[serde(default)]
    pub goal_against: Option<i32>,
    #[serde(default)]
    pub goal_differential: Option<i32>,
    #[serde(default)]
    pub home_wins: Option<i32>,
    #[serde(default)]
    pub home_losses: Option<i32>,
    #[serde(default)]
    pub road_wins: Option<i32>,
    #[serde(default)]
    pub road_losses: Option<i32>,
    #[serde(default)]
    pub l10_wins: Option<i32>,
    #[serde(default)]
    pub l10_losses: Option<i32>,
    #[serde(default)]
    pub l10_ot_losses: Option<i32>,
    #[serde(default)]
    pub streak_code: Option<String>,
    #[serde(default)]
    pub streak_count: Option<i32>,
    #[serde(default)]
    pub league_sequence: Option<i32>,
    #[serde(default)]
    pub conference_sequence: Option<i32>,
    #[serde(default)]
    pub division_sequence: Option<i32>,
    #[serde(default)]
    pub wildcard_sequence: Option<i32>,
    #[serde(default)]
    pub clinch_indicator: Option<String>,
}

/// Response of `/standings-season`: which seasons have standings and the
/// rules each one used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsSeasonResponse {
    #[serde(default)]
    pub current_date: Option<String>,
    #[serde(default)]
    pub seasons: Vec<StandingsSeason>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsSeason {
    pub id: u32,
    #[serde(default)]
    pub conferences_in_use: Option<bool>,
    #[serde(default)]
    pub divisions_in_use: Option<bool>,
    #[serde(rename = "pointForOTLossInUse", default)]
    pub point_for_ot_loss_in_use: Option<bool>,
    #[serde(default)]
    pub regulation_wins_in_use: Option<bool>,
    #[serde(default)]
    pub row_in_use: Option<bool>,
    #[serde(default)]
    pub standings_start: Option<String>,
    #[serde(default)]
    pub standings_end: Option<String>,
    #[serde(default)]
    pub ties_in_use: Option<bool>,
    #[serde(default)]
    pub wildcard_in_use: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_division_filter() {
        let json = r#"{
            "wildCardIndicator": true,
            "standings": [
                {"divisionAbbrev": "C", "teamAbbrev": {"default": "WPG"}, "points": 116, "l10Wins": 7},
                {"divisionAbbrev": "A", "teamAbbrev": {"default": "TOR"}, "points": 108},
                {"divisionAbbrev": "C", "teamAbbrev": {"default": "DAL"}, "points": 106}
            ]
        }"#;

        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        let central: Vec<&str> = response
            .division("C")
            .filter_map(|row| row.team_abbrev.as_ref().map(|a| a.default.as_str()))
            .collect();
        assert_eq!(central, vec!["WPG", "DAL"]);
        assert_eq!(response.standings[0].l10_wins, Some(7));
    }

    #[test]
    fn test_standings_seasons() {
        let json = r#"{
            "currentDate": "2025-10-17",
            "seasons": [{"id": 19171918, "tiesInUse": true, "wildcardInUse": false},
                        {"id": 20252026, "wildcardInUse": true, "pointForOTLossInUse": true, "standingsStart": "2025-10-07"}]
        }"#;

        let response: StandingsSeasonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.seasons.len(), 2);
        assert_eq!(response.seasons[1].id, 20252026);
        assert_eq!(response.seasons[0].ties_in_use, Some(true));
        assert_eq!(response.seasons[1].point_for_ot_loss_in_use, Some(true));
    }
}
