//! Shape checks for numeric game and player identifiers

use crate::constants::id_digits;
use crate::error::{NhlError, Result};

fn validate_id(label: &str, id: i64, min_digits: usize, max_digits: usize) -> Result<i64> {
    if id <= 0 {
        return Err(NhlError::validation(format!(
            "Invalid {label} ID: {id}. Must be a positive integer."
        )));
    }

    let digits = id.to_string().len();
    if !(min_digits..=max_digits).contains(&digits) {
        return Err(NhlError::validation(format!(
            "Invalid {label} ID format: {id}. {} IDs should be {min_digits}-{max_digits} digits.",
            capitalize(label)
        )));
    }

    Ok(id)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Game ids are positive and 8-10 digits long, e.g. `2025020711`.
pub fn validate_game_id(game_id: i64) -> Result<i64> {
    validate_id(
        "game",
        game_id,
        id_digits::GAME_ID_MIN,
        id_digits::GAME_ID_MAX,
    )
}

/// Player ids are positive and 6-8 digits long, e.g. `8478402`.
pub fn validate_player_id(player_id: i64) -> Result<i64> {
    validate_id(
        "player",
        player_id,
        id_digits::PLAYER_ID_MIN,
        id_digits::PLAYER_ID_MAX,
    )
}
