use std::sync::Arc;
use tracing::instrument;

use crate::api::{HttpTransport, STANDINGS_NOW, STANDINGS_SEASON};
use crate::error::Result;
use crate::models::{StandingsResponse, StandingsSeasonResponse};

/// League standings.
#[derive(Debug, Clone)]
pub struct StandingsApi {
    transport: Arc<HttpTransport>,
}

impl StandingsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Standings as of today.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<StandingsResponse> {
        self.transport.get(STANDINGS_NOW).await
    }

    /// Seasons for which standings exist, with the rules each one used.
    #[instrument(skip(self))]
    pub async fn season(&self) -> Result<StandingsSeasonResponse> {
        self.transport.get(STANDINGS_SEASON).await
    }
}
