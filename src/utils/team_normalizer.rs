//! Team abbreviation validation

use crate::error::{NhlError, Result};

/// Valid NHL team abbreviations for the current league alignment.
pub const VALID_TEAMS: [&str; 32] = [
    "ANA", // Anaheim Ducks
    "BOS", // Boston Bruins
    "BUF", // Buffalo Sabres
    "CAR", // Carolina Hurricanes
    "CBJ", // Columbus Blue Jackets
    "CGY", // Calgary Flames
    "CHI", // Chicago Blackhawks
    "COL", // Colorado Avalanche
    "DAL", // Dallas Stars
    "DET", // Detroit Red Wings
    "EDM", // Edmonton Oilers
    "FLA", // Florida Panthers
    "LAK", // Los Angeles Kings
    "MIN", // Minnesota Wild
    "MTL", // Montreal Canadiens
    "NJD", // New Jersey Devils
    "NSH", // Nashville Predators
    "NYI", // New York Islanders
    "NYR", // New York Rangers
    "OTT", // Ottawa Senators
    "PHI", // Philadelphia Flyers
    "PIT", // Pittsburgh Penguins
    "SEA", // Seattle Kraken
    "SJS", // San Jose Sharks
    "STL", // St. Louis Blues
    "TBL", // Tampa Bay Lightning
    "TOR", // Toronto Maple Leafs
    "UTA", // Utah
    "VAN", // Vancouver Canucks
    "VGK", // Vegas Golden Knights
    "WPG", // Winnipeg Jets
    "WSH", // Washington Capitals
];

fn lookup(team: &str) -> Option<&'static str> {
    let normalized = team.trim().to_uppercase();
    VALID_TEAMS
        .iter()
        .copied()
        .find(|code| *code == normalized)
}

/// Trims and upper-cases a team abbreviation and checks it against [`VALID_TEAMS`].
///
/// # Returns
/// * `Ok(&'static str)` - The canonical upper-case code
/// * `Err(NhlError::Validation)` - The input is empty or not a known team
///
/// # Example
/// ```
/// use nhl_api::utils::normalize_team_abbr;
///
/// assert_eq!(normalize_team_abbr(" wpg ").unwrap(), "WPG");
/// assert!(normalize_team_abbr("XYZ").is_err());
/// ```
pub fn normalize_team_abbr(team: &str) -> Result<&'static str> {
    if team.trim().is_empty() {
        return Err(NhlError::validation(
            "Team abbreviation is required and must be a non-empty string",
        ));
    }

    lookup(team).ok_or_else(|| {
        NhlError::validation(format!(
            "Invalid team abbreviation: \"{team}\". Must be one of: {}",
            VALID_TEAMS.join(", ")
        ))
    })
}

/// Same check as [`normalize_team_abbr`], answered as a boolean.
pub fn is_valid_team_abbr(team: &str) -> bool {
    lookup(team).is_some()
}
