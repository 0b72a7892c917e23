//! Input validation and normalization used before any request is made

pub mod date_formatter;
pub mod ids;
pub mod season;
pub mod team_normalizer;

pub use date_formatter::{DateInput, format_date, parse_date, today_date};
pub use ids::{validate_game_id, validate_player_id};
pub use season::{current_season_id, format_season_id, parse_season_string, season_id_for_date};
pub use team_normalizer::{VALID_TEAMS, is_valid_team_abbr, normalize_team_abbr};
