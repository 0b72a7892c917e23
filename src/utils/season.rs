//! Season id calculation and formatting
//!
//! A season id concatenates the start and end year of one season:
//! the 2025-26 season is `20252026`.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::error::{NhlError, Result};

/// First month (October) that belongs to the season starting in the same calendar year.
pub const SEASON_START_MONTH: u32 = 10;

/// Season id for the current local date.
pub fn current_season_id() -> u32 {
    season_id_for_date(Local::now().date_naive())
}

/// Season id for an arbitrary date.
///
/// October through December belong to the season that starts that year;
/// January through September belong to the season that started the year before.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_api::utils::season_id_for_date;
///
/// let opening_night = NaiveDate::from_ymd_opt(2025, 10, 7).unwrap();
/// assert_eq!(season_id_for_date(opening_night), 20252026);
///
/// let trade_deadline = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
/// assert_eq!(season_id_for_date(trade_deadline), 20252026);
/// ```
pub fn season_id_for_date(date: NaiveDate) -> u32 {
    let year = date.year().max(0) as u32;
    let start_year = if date.month() >= SEASON_START_MONTH {
        year
    } else {
        year.saturating_sub(1)
    };
    let season_id = start_year * 10_000 + start_year + 1;
    debug!("Date {date} belongs to season {season_id}");
    season_id
}

/// Renders a season id for display: `20252026` becomes `"2025-26"`.
/// Ids that are not exactly 8 digits are returned as plain numbers.
pub fn format_season_id(season_id: u32) -> String {
    let season = season_id.to_string();
    if season.len() != 8 {
        return season;
    }
    format!("{}-{}", &season[0..4], &season[6..8])
}

/// Parses `"YYYY-YY"` or `"YYYY-YYYY"` into a season id.
///
/// A two-digit end year borrows the century of the start year.
///
/// # Example
/// ```
/// use nhl_api::utils::{format_season_id, parse_season_string};
///
/// assert_eq!(parse_season_string("2025-26").unwrap(), 20252026);
/// assert_eq!(parse_season_string("1999-2000").unwrap(), 19992000);
/// assert_eq!(format_season_id(parse_season_string("2025-26").unwrap()), "2025-26");
/// ```
pub fn parse_season_string(season: &str) -> Result<u32> {
    let invalid = || {
        NhlError::validation(format!(
            "Invalid season format: {season}. Expected format: YYYY-YY"
        ))
    };

    let parts: Vec<&str> = season.split('-').collect();
    let [start_year, end_year] = parts.as_slice() else {
        return Err(invalid());
    };

    if start_year.is_empty()
        || end_year.is_empty()
        || !start_year.bytes().all(|b| b.is_ascii_digit())
        || !end_year.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let end_year = if end_year.len() == 2 {
        let century = start_year.get(0..2).ok_or_else(invalid)?;
        format!("{century}{end_year}")
    } else {
        end_year.to_string()
    };

    format!("{start_year}{end_year}")
        .parse::<u32>()
        .map_err(|_| invalid())
}
