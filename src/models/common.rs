use serde::{Deserialize, Serialize};
use std::fmt;

/// A translatable string, e.g. `{"default": "Maple Leafs", "fr": "Maple Leafs"}`.
/// Only the default translation is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub default: String,
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default)
    }
}

/// Identifier the search service sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlexibleId::Number(n) => Some(*n),
            FlexibleId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Team as it appears inside a game: identity plus the running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithScore {
    pub id: i64,
    pub abbrev: String,
    #[serde(default)]
    pub common_name: Option<LocalizedString>,
    #[serde(default)]
    pub place_name: Option<LocalizedString>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
    /// Shots on goal
    #[serde(default)]
    pub sog: Option<i32>,
    #[serde(default)]
    pub away_split_squad: Option<bool>,
    #[serde(default)]
    pub home_split_squad: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    pub time_remaining: String,
    pub seconds_remaining: i32,
    pub running: bool,
    pub in_intermission: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    pub number: i32,
    pub period_type: String,
    #[serde(default)]
    pub max_regulation_periods: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvBroadcast {
    pub id: i64,
    pub market: String,
    pub country_code: String,
    pub network: String,
}
