//! Typed views of the NHL API payloads.
//!
//! Field names follow the upstream camelCase keys. Anything the API may omit is
//! an `Option`, and missing lists decode as empty.

pub mod common;
pub mod game;
pub mod player;
pub mod schedule;
pub mod standings;
pub mod team;

pub use common::{
    FlexibleId, GameClock, LocalizedString, PeriodDescriptor, TeamWithScore, TvBroadcast,
};
pub use game::{
    BoxscoreResponse, GameScore, GameSummary, GoalSummary, Play, PlayByPlayResponse, PlayDetails,
    PlayerByGameStats, RosterSpot, ScoreResponse,
};
pub use player::{PlayerSearchResult, PlayerStatsResponse, SeasonTotals, StatLine};
pub use schedule::{
    GameOutcome, GameWeek, PlayerSummary, ScheduleGame, ScheduleResponse, TeamScheduleResponse,
};
pub use standings::{StandingsEntry, StandingsResponse, StandingsSeason, StandingsSeasonResponse};
pub use team::{RosterPlayer, RosterResponse, TeamStatsResponse};
