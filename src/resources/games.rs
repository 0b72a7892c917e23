use std::sync::Arc;
use tracing::instrument;

use crate::api::{HttpTransport, SCORE_NOW, boxscore_path, play_by_play_path};
use crate::error::Result;
use crate::models::{BoxscoreResponse, PlayByPlayResponse, ScoreResponse};
use crate::utils::validate_game_id;

/// Live scores and per-game detail.
#[derive(Debug, Clone)]
pub struct GamesApi {
    transport: Arc<HttpTransport>,
}

impl GamesApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Scoreboard for the current day.
    #[instrument(skip(self))]
    pub async fn scores(&self) -> Result<ScoreResponse> {
        self.transport.get(SCORE_NOW).await
    }

    /// Box score of one game. `game_id` must be a positive 8-10 digit id.
    #[instrument(skip(self))]
    pub async fn boxscore(&self, game_id: i64) -> Result<BoxscoreResponse> {
        let game_id = validate_game_id(game_id)?;
        self.transport.get(&boxscore_path(game_id)).await
    }

    /// Every recorded event of one game, in the order the API lists them.
    #[instrument(skip(self))]
    pub async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlayResponse> {
        let game_id = validate_game_id(game_id)?;
        self.transport.get(&play_by_play_path(game_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing_utils::{TestDataBuilder, transport_for};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_scores_returns_games_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/score/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "currentDate": "2025-10-17",
                "games": [
                    TestDataBuilder::final_game(2025020100, ("EDM", 4), ("WPG", 2)),
                    TestDataBuilder::final_game(2025020101, ("NYR", 1), ("NJD", 3)),
                ]
            })))
            .mount(&server)
            .await;

        let games = GamesApi::new(transport_for(&server));
        let scores = games.scores().await.unwrap();

        assert_eq!(scores.current_date.as_deref(), Some("2025-10-17"));
        assert_eq!(scores.games.len(), 2);
        assert_eq!(scores.games[0].away_team.score, Some(4));
        assert_eq!(scores.games[1].home_team.abbrev, "NJD");
    }

    #[tokio::test]
    async fn test_boxscore_requests_game_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2025020711/boxscore"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestDataBuilder::final_game(2025020711, ("EDM", 4), ("WPG", 2))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let games = GamesApi::new(transport_for(&server));
        let boxscore = games.boxscore(2025020711).await.unwrap();
        assert_eq!(boxscore.id, Some(2025020711));
        assert_eq!(boxscore.home_team.unwrap().score, Some(2));
    }

    #[tokio::test]
    async fn test_invalid_game_ids_fail_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let games = GamesApi::new(transport_for(&server));

        let error = games.boxscore(123).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(error.to_string().contains("123"));

        let error = games.play_by_play(-2025020711).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_play_by_play_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2025020711/play-by-play"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2025020711,
                "plays": [
                    {"eventId": 3, "typeDescKey": "period-start"},
                    {"eventId": 1, "typeDescKey": "faceoff"},
                    {"eventId": 2, "typeDescKey": "shot-on-goal"}
                ]
            })))
            .mount(&server)
            .await;

        let games = GamesApi::new(transport_for(&server));
        let pbp = games.play_by_play(2025020711).await.unwrap();
        let kinds: Vec<&str> = pbp
            .plays
            .iter()
            .filter_map(|p| p.type_desc_key.as_deref())
            .collect();
        assert_eq!(kinds, vec!["period-start", "faceoff", "shot-on-goal"]);
    }

    #[tokio::test]
    async fn test_missing_game_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2025029999/boxscore"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let games = GamesApi::new(transport_for(&server));
        let error = games.boxscore(2025029999).await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.endpoint(), Some("/gamecenter/2025029999/boxscore"));
    }
}
