use super::common::{GameClock, LocalizedString, PeriodDescriptor, TeamWithScore, TvBroadcast};
use super::schedule::GameOutcome;
use serde::{Deserialize, Serialize};

/// Response of `/score/now`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(default)]
    pub prev_date: Option<String>,
    #[serde(default)]
    pub current_date: Option<String>,
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub game_week: Vec<ScoreGameWeek>,
    #[serde(default)]
    pub games: Vec<GameScore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreGameWeek {
    pub date: String,
    #[serde(default)]
    pub day_abbrev: Option<String>,
    #[serde(default)]
    pub number_of_games: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub id: i64,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub game_type: Option<i32>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub venue: Option<LocalizedString>,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: Option<String>,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: Option<String>,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: Option<String>,
    #[serde(default)]
    pub venue_timezone: Option<String>,
    #[serde(default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    #[serde(default)]
    pub game_state: Option<String>,
    #[serde(default)]
    pub game_schedule_state: Option<String>,
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    pub away_team: TeamWithScore,
    pub home_team: TeamWithScore,
    #[serde(default)]
    pub clock: Option<GameClock>,
    #[serde(default)]
    pub neutral_site: Option<bool>,
    #[serde(default)]
    pub game_center_link: Option<String>,
    #[serde(default)]
    pub goals: Vec<GoalSummary>,
}

/// Goal line as listed in the live scoreboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default)]
    pub time_in_period: Option<String>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub name: Option<LocalizedString>,
    #[serde(default)]
    pub team_abbrev: Option<String>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub strength: Option<String>,
}

/// Response of `/gamecenter/:gameId/boxscore`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub game_type: Option<i32>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub venue: Option<LocalizedString>,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: Option<String>,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: Option<String>,
    #[serde(default)]
    pub venue_timezone: Option<String>,
    #[serde(default)]
    pub game_state: Option<String>,
    #[serde(default)]
    pub game_schedule_state: Option<String>,
    #[serde(default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    #[serde(default)]
    pub away_team: Option<TeamWithScore>,
    #[serde(default)]
    pub home_team: Option<TeamWithScore>,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub clock: Option<GameClock>,
    #[serde(default)]
    pub game_outcome: Option<GameOutcome>,
    #[serde(default)]
    pub player_by_game_stats: Option<PlayerByGameStats>,
    #[serde(default)]
    pub summary: Option<GameSummary>,
    #[serde(default)]
    pub game_video: Option<GameVideo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerByGameStats {
    #[serde(default)]
    pub away_team: Option<TeamPlayerStats>,
    #[serde(default)]
    pub home_team: Option<TeamPlayerStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayerStats {
    #[serde(default)]
    pub forwards: Vec<SkaterGameStats>,
    #[serde(default)]
    pub defense: Vec<SkaterGameStats>,
    #[serde(default)]
    pub goalies: Vec<GoalieGameStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterGameStats {
    pub player_id: i64,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub name: Option<LocalizedString>,
    #[serde(default)]
    pub position: Option<String>,
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
    pub hits: Option<i32>,
    #[serde(default)]
    pub sog: Option<i32>,
    #[serde(default)]
    pub blocked_shots: Option<i32>,
    #[serde(default)]
    pub toi: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieGameStats {
    pub player_id: i64,
    #[serde(default)]
    pub sweater_number: Option<i32>,
    #[serde(default)]
    pub name: Option<LocalizedString>,
    #[serde(default)]
    pub saves: Option<i32>,
    #[serde(default)]
    pub shots_against: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub save_pctg: Option<f64>,
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub toi: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    #[serde(default)]
    pub linescore: Option<Linescore>,
    #[serde(default)]
    pub scoring: Vec<ScoringPeriod>,
    #[serde(default)]
    pub penalties: Vec<PenaltyPeriod>,
    #[serde(default)]
    pub shootout: Vec<ShootoutAttempt>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub by_period: Vec<PeriodScore>,
    #[serde(default)]
    pub totals: Option<TeamTotals>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodScore {
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub away: Option<i32>,
    #[serde(default)]
    pub home: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamTotals {
    #[serde(default)]
    pub away: Option<i32>,
    #[serde(default)]
    pub home: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPeriod {
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub goals: Vec<GoalSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyPeriod {
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub penalties: Vec<Penalty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    #[serde(default)]
    pub time_in_period: Option<String>,
    #[serde(rename = "type", default)]
    pub penalty_type: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub team_abbrev: Option<LocalizedString>,
    #[serde(default)]
    pub desc_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootoutAttempt {
    #[serde(default)]
    pub sequence: Option<i32>,
    #[serde(default)]
    pub team_abbrev: Option<LocalizedString>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVideo {
    #[serde(default)]
    pub three_min_recap: Option<String>,
    #[serde(default)]
    pub condensed_game: Option<String>,
}

/// Response of `/gamecenter/:gameId/play-by-play`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub game_type: Option<i32>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub venue: Option<LocalizedString>,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: Option<String>,
    #[serde(default)]
    pub game_state: Option<String>,
    #[serde(default)]
    pub game_schedule_state: Option<String>,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub away_team: Option<TeamWithScore>,
    #[serde(default)]
    pub home_team: Option<TeamWithScore>,
    #[serde(default)]
    pub clock: Option<GameClock>,
    #[serde(default)]
    pub roster_spots: Vec<RosterSpot>,
    /// Events in the order the API lists them
    #[serde(default)]
    pub plays: Vec<Play>,
}

/// A player dressed for the game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSpot {
    pub player_id: i64,
    #[serde(default)]
    pub team_id: Option<i64>,
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub event_id: i64,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub time_in_period: Option<String>,
    #[serde(default)]
    pub time_remaining: Option<String>,
    #[serde(default)]
    pub situation_code: Option<String>,
    #[serde(default)]
    pub home_team_defending_side: Option<String>,
    #[serde(default)]
    pub type_code: Option<i32>,
    #[serde(default)]
    pub type_desc_key: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub details: Option<PlayDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    #[serde(default)]
    pub x_coord: Option<i32>,
    #[serde(default)]
    pub y_coord: Option<i32>,
    #[serde(default)]
    pub zone_code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub event_owner_team_id: Option<i64>,
    #[serde(default)]
    pub losing_player_id: Option<i64>,
    #[serde(default)]
    pub winning_player_id: Option<i64>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub shooting_player_id: Option<i64>,
    #[serde(default)]
    pub goalie_in_net_id: Option<i64>,
    #[serde(default)]
    pub scoring_player_id: Option<i64>,
    #[serde(default)]
    pub scoring_player_total: Option<i32>,
    #[serde(default)]
    pub assist1_player_id: Option<i64>,
    #[serde(default)]
    pub assist1_player_total: Option<i32>,
    #[serde(default)]
    pub assist2_player_id: Option<i64>,
    #[serde(default)]
    pub assist2_player_total: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(rename = "awaySOG", default)]
    pub away_sog: Option<i32>,
    #[serde(rename = "homeSOG", default)]
    pub home_sog: Option<i32>,
    #[serde(default)]
    pub hitting_player_id: Option<i64>,
    #[serde(default)]
    pub hittee_player_id: Option<i64>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub committed_by_player_id: Option<i64>,
    #[serde(default)]
    pub drawn_by_player_id: Option<i64>,
    #[serde(default)]
    pub desc_key: Option<String>,
    #[serde(default)]
    pub type_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_by_play_keeps_event_order() {
        let json = r#"{
            "id": 2025020711,
            "gameState": "OFF",
            "rosterSpots": [{"playerId": 8478402, "teamId": 22, "sweaterNumber": 97}],
            "plays": [
                {"eventId": 102, "typeDescKey": "faceoff", "sortOrder": 11, "timeInPeriod": "00:00"},
                {"eventId": 57, "typeDescKey": "goal", "sortOrder": 12,
                 "details": {"scoringPlayerId": 8478402, "awaySOG": 1, "homeSOG": 0, "homeScore": 0, "awayScore": 1}}
            ]
        }"#;

        let response: PlayByPlayResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = response.plays.iter().map(|p| p.event_id).collect();
        assert_eq!(ids, vec![102, 57]);

        let details = response.plays[1].details.as_ref().unwrap();
        assert_eq!(details.scoring_player_id, Some(8478402));
        assert_eq!(details.away_sog, Some(1));
        assert_eq!(response.roster_spots[0].sweater_number, Some(97));
    }

    #[test]
    fn test_boxscore_with_player_stats() {
        let json = r#"{
            "id": 2025020711,
            "awayTeam": {"id": 22, "abbrev": "EDM", "score": 4, "sog": 31},
            "homeTeam": {"id": 52, "abbrev": "WPG", "score": 2, "sog": 28},
            "gameOutcome": {"lastPeriodType": "REG"},
            "playerByGameStats": {
                "awayTeam": {
                    "forwards": [{"playerId": 8478402, "goals": 2, "assists": 1, "toi": "21:14"}],
                    "defense": [],
                    "goalies": [{"playerId": 8479973, "savePctg": 0.928571, "decision": "W"}]
                }
            }
        }"#;

        let response: BoxscoreResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.away_team.as_ref().unwrap().sog, Some(31));
        let away = response.player_by_game_stats.unwrap().away_team.unwrap();
        assert_eq!(away.forwards[0].goals, Some(2));
        assert_eq!(away.goalies[0].decision.as_deref(), Some("W"));
    }

    #[test]
    fn test_score_response_with_empty_day() {
        let response: ScoreResponse =
            serde_json::from_str(r#"{"currentDate": "2025-07-01", "games": []}"#).unwrap();
        assert!(response.games.is_empty());
        assert!(response.game_week.is_empty());
    }
}
