//! Typed client for the public NHL web API
//!
//! This library wraps the NHL schedule, score, game center, roster, player and
//! standings endpoints behind namespaced async operations. Inputs are validated
//! before any request is sent and every failure is classified into one
//! [`NhlError`] kind.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_api::{NhlClient, NhlError, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), NhlError> {
//!     let client = NhlClient::new()?;
//!
//!     // Today's games
//!     for game in client.schedule.today().await? {
//!         println!("{} @ {}", game.away_team.abbrev, game.home_team.abbrev);
//!     }
//!
//!     // Team-scoped queries validate the team code when they run
//!     let week = client.schedule.team("wpg").week().await?;
//!     println!("{} games this week", week.games.len());
//!
//!     // Player search goes to the search host
//!     let hits = client.players.search("McDavid", SearchOptions::default()).await?;
//!     if let Some(id) = hits.first().and_then(|hit| hit.player_id.as_i64()) {
//!         let landing = client.players.get(id).stats().await?;
//!         println!("{:?}", landing.full_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod resources;
#[cfg(test)]
pub(crate) mod testing_utils;
pub mod utils;

// Re-export commonly used types for convenience
pub use api::{ApiEndpoints, ApiHost, ApiRequest, HttpTransport, resolve_host};
pub use client::{ClientOptions, NhlClient};
pub use config::Config;
pub use error::{CliError, ErrorKind, NhlError, Result};
pub use resources::SearchOptions;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
