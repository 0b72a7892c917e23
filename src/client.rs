use std::sync::Arc;
use tracing::debug;

use crate::api::{ApiEndpoints, HttpTransport};
use crate::constants::DEFAULT_HTTP_TIMEOUT_MS;
use crate::error::Result;
use crate::resources::{GamesApi, PlayersApi, ScheduleApi, StandingsApi, TeamsApi};

/// Settings applied once when an [`NhlClient`] is built.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Base URLs of the NHL hosts
    pub endpoints: ApiEndpoints,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            endpoints: ApiEndpoints::default(),
        }
    }
}

impl ClientOptions {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_endpoints(mut self, endpoints: ApiEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

/// Entry point of the library.
///
/// Every resource module shares a single transport, so cloning the client or
/// any of its fields is cheap.
///
/// # Example
/// ```no_run
/// use nhl_api::NhlClient;
///
/// # async fn run() -> nhl_api::Result<()> {
/// let client = NhlClient::new()?;
/// let games = client.schedule.today().await?;
/// let standings = client.standings.current().await?;
/// let roster = client.teams.get("TOR").roster(None).await?;
/// println!("{} games, {} teams, {} forwards", games.len(), standings.standings.len(), roster.forwards.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NhlClient {
    pub schedule: ScheduleApi,
    pub games: GamesApi,
    pub teams: TeamsApi,
    pub players: PlayersApi,
    pub standings: StandingsApi,
    transport: Arc<HttpTransport>,
}

impl NhlClient {
    /// Client against the public hosts with a 10 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Result<Self> {
        debug!(
            "Creating NHL client with {}ms timeout against {}",
            options.timeout_ms, options.endpoints.web
        );
        let transport = Arc::new(HttpTransport::new(options.timeout_ms, options.endpoints)?);

        Ok(Self {
            schedule: ScheduleApi::new(Arc::clone(&transport)),
            games: GamesApi::new(Arc::clone(&transport)),
            teams: TeamsApi::new(Arc::clone(&transport)),
            players: PlayersApi::new(Arc::clone(&transport)),
            standings: StandingsApi::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// The transport shared by all resource modules, for raw requests.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
