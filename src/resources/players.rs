use std::sync::Arc;
use tracing::{debug, instrument};

use crate::api::{HttpTransport, player_landing_path, player_search_path};
use crate::constants::search;
use crate::error::{NhlError, Result};
use crate::models::{PlayerSearchResult, PlayerStatsResponse};
use crate::utils::validate_player_id;

/// Knobs for [`PlayersApi::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits, must be positive
    pub limit: u32,
    /// Only return players who are currently active
    pub active: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: search::DEFAULT_LIMIT,
            active: true,
        }
    }
}

/// Player search and player landing pages.
#[derive(Debug, Clone)]
pub struct PlayersApi {
    transport: Arc<HttpTransport>,
}

impl PlayersApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Searches players by name on the search host.
    ///
    /// # Example
    /// ```no_run
    /// use nhl_api::SearchOptions;
    ///
    /// # async fn run() -> nhl_api::Result<()> {
    /// let client = nhl_api::NhlClient::new()?;
    /// let hits = client.players.search("McDavid", SearchOptions::default()).await?;
    /// for hit in hits {
    ///     println!("{} ({:?})", hit.name, hit.team_abbrev);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        name: &str,
        options: SearchOptions,
    ) -> Result<Vec<PlayerSearchResult>> {
        let query = name.trim();
        if query.is_empty() {
            return Err(NhlError::validation(
                "Player name is required and must be a non-empty string",
            ));
        }
        if options.limit == 0 {
            return Err(NhlError::validation(
                "Search limit must be a positive integer",
            ));
        }

        let results: Vec<PlayerSearchResult> = self
            .transport
            .get(&player_search_path(query, options.limit, options.active))
            .await?;
        debug!("Player search for '{query}' returned {} hits", results.len());
        Ok(results)
    }

    /// Queries for one player, e.g. `client.players.get(8478402).stats()`.
    pub fn get(&self, player_id: i64) -> PlayerQuery<'_> {
        PlayerQuery {
            transport: self.transport.as_ref(),
            player_id,
        }
    }
}

/// Builder returned by [`PlayersApi::get`].
#[derive(Debug, Clone, Copy)]
pub struct PlayerQuery<'a> {
    transport: &'a HttpTransport,
    player_id: i64,
}

impl PlayerQuery<'_> {
    /// Landing page: bio, featured stats, season and career totals.
    pub async fn stats(&self) -> Result<PlayerStatsResponse> {
        let player_id = validate_player_id(self.player_id)?;
        self.transport.get(&player_landing_path(player_id)).await
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
        matchers::{method, path, query_param},
    };

    #[test]
    fn test_search_option_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.limit, 10);
        assert!(options.active);
    }

    #[tokio::test]
    async fn test_search_sends_encoded_query_and_options() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/player"))
            .and(query_param("culture", "en-us"))
            .and(query_param("q", "Connor McDavid"))
            .and(query_param("limit", "5"))
            .and(query_param("active", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                TestDataBuilder::search_hit(8478402, "Connor McDavid", "EDM")
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let players = PlayersApi::new(transport_for(&server));
        let hits = players
            .search(
                "  Connor McDavid ",
                SearchOptions {
                    limit: 5,
                    active: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].player_id.as_i64(), Some(8478402));
        assert_eq!(hits[0].team_abbrev.as_deref(), Some("EDM"));
    }

    #[tokio::test]
    async fn test_blank_search_fails_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let players = PlayersApi::new(transport_for(&server));
        for blank in ["", "  ", "\t\n"] {
            let error = players
                .search(blank, SearchOptions::default())
                .await
                .unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Validation);
        }

        let error = players
            .search(
                "Matthews",
                SearchOptions {
                    limit: 0,
                    active: true,
                },
            )
            .await
            .unwrap_err();
        assert!(error.is_validation());
    }

    #[tokio::test]
    async fn test_player_stats_not_found_carries_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player/8478402/landing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let players = PlayersApi::new(transport_for(&server));
        let error = players.get(8478402).stats().await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.endpoint(), Some("/player/8478402/landing"));
    }

    #[tokio::test]
    async fn test_player_stats_success_and_bad_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player/8478402/landing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "playerId": 8478402,
                "firstName": {"default": "Connor"},
                "lastName": {"default": "McDavid"},
                "position": "C"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let players = PlayersApi::new(transport_for(&server));
        let landing = players.get(8478402).stats().await.unwrap();
        assert_eq!(landing.full_name().as_deref(), Some("Connor McDavid"));

        let error = players.get(123).stats().await.unwrap_err();
        assert!(error.is_validation());
        assert!(error.to_string().contains("6-8 digits"));
    }
}
