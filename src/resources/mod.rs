//! Per-resource operations. Each one validates its inputs, builds the request
//! path and hands it to the shared transport.

pub mod games;
pub mod players;
pub mod schedule;
pub mod standings;
pub mod teams;

pub use games::GamesApi;
pub use players::{PlayerQuery, PlayersApi, SearchOptions};
pub use schedule::{ScheduleApi, TeamSchedule};
pub use standings::StandingsApi;
pub use teams::{TeamQuery, TeamsApi};
