use crate::api::{ApiEndpoints, HttpTransport};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

/// Transport pointing every host at a mock server.
pub fn transport_for(server: &MockServer) -> Arc<HttpTransport> {
    transport_with_timeout(server, 2_000)
}

pub fn transport_with_timeout(server: &MockServer, timeout_ms: u64) -> Arc<HttpTransport> {
    Arc::new(
        HttpTransport::new(timeout_ms, ApiEndpoints::single(server.uri()))
            .expect("transport should build"),
    )
}

/// Builders for JSON payloads shaped like the upstream API.
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub fn team(id: i64, abbrev: &str, score: Option<i32>) -> Value {
        let mut team = json!({
            "id": id,
            "abbrev": abbrev,
            "commonName": {"default": abbrev},
        });
        if let Some(score) = score {
            team["score"] = json!(score);
        }
        team
    }

    /// A scheduled game that has not started yet.
    pub fn scheduled_game(id: i64, away: &str, home: &str) -> Value {
        json!({
            "id": id,
            "season": 20252026,
            "gameType": 2,
            "gameDate": "2025-10-07",
            "startTimeUTC": "2025-10-07T23:00:00Z",
            "gameState": "FUT",
            "awayTeam": Self::team(1, away, None),
            "homeTeam": Self::team(2, home, None),
        })
    }

    /// A finished game with a final score.
    pub fn final_game(id: i64, away: (&str, i32), home: (&str, i32)) -> Value {
        json!({
            "id": id,
            "season": 20252026,
            "gameType": 2,
            "gameState": "OFF",
            "awayTeam": Self::team(1, away.0, Some(away.1)),
            "homeTeam": Self::team(2, home.0, Some(home.1)),
            "gameOutcome": {"lastPeriodType": "REG"},
        })
    }

    /// Schedule week whose days hold the given games, one day per inner list.
    pub fn schedule_week(days: Vec<(&str, Vec<Value>)>) -> Value {
        let game_week: Vec<Value> = days
            .into_iter()
            .map(|(date, games)| {
                json!({
                    "date": date,
                    "numberOfGames": games.len(),
                    "games": games,
                })
            })
            .collect();
        json!({ "gameWeek": game_week })
    }

    pub fn roster_player(id: i64, first: &str, last: &str, position: &str) -> Value {
        json!({
            "id": id,
            "firstName": {"default": first},
            "lastName": {"default": last},
            "positionCode": position,
        })
    }

    pub fn search_hit(player_id: i64, name: &str, team: &str) -> Value {
        json!({
            "playerId": player_id.to_string(),
            "name": name,
            "teamAbbrev": team,
            "active": true,
        })
    }
}
