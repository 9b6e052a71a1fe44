//! Submit-time rules for a [`DraftBooking`].
//!
//! Rules run in a fixed order and the first failure wins, so the form only
//! ever shows one message.

use crate::draft::DraftBooking;

pub const MAX_PLAYERS_PER_LANE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("all fields must be filled in.")]
    IncompleteFields,
    #[error("the number of shoes must match the number of players.")]
    ShoeCountMismatch,
    #[error("all shoes must have a size filled in.")]
    MissingShoeSize,
    #[error("a maximum of 4 players per lane is allowed.")]
    LaneCapacityExceeded,
}

type Rule = fn(&DraftBooking) -> Result<(), ValidationError>;

const RULES: [Rule; 4] = [
    check_completeness,
    check_shoe_count,
    check_shoe_sizes,
    check_lane_capacity,
];

/// Run every rule in order, stopping at the first failure.
pub fn validate(draft: &DraftBooking) -> Result<(), ValidationError> {
    RULES.iter().try_for_each(|rule| rule(draft))
}

/// Parse a count field the way the form reads it: surrounding whitespace is ignored.
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn check_completeness(draft: &DraftBooking) -> Result<(), ValidationError> {
    let fields = [&draft.date, &draft.time, &draft.player_count, &draft.lane_count];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::IncompleteFields);
    }
    Ok(())
}

fn check_shoe_count(draft: &DraftBooking) -> Result<(), ValidationError> {
    match parse_count(&draft.player_count) {
        Some(players) if players as usize == draft.shoes.len() => Ok(()),
        _ => Err(ValidationError::ShoeCountMismatch),
    }
}

fn check_shoe_sizes(draft: &DraftBooking) -> Result<(), ValidationError> {
    if draft.shoes.iter().any(str::is_empty) {
        return Err(ValidationError::MissingShoeSize);
    }
    Ok(())
}

/// At most [`MAX_PLAYERS_PER_LANE`] players per lane, checked as
/// `players > 4 * lanes` so no division is involved.
///
/// A lane count that is zero or not a number has no capacity: any positive
/// player count fails here, rather than slipping through as an undefined ratio.
fn check_lane_capacity(draft: &DraftBooking) -> Result<(), ValidationError> {
    // Player count already parsed in check_shoe_count.
    let players = parse_count(&draft.player_count).unwrap_or(0) as u64;
    let lanes = parse_count(&draft.lane_count).unwrap_or(0) as u64;

    if players > lanes * MAX_PLAYERS_PER_LANE as u64 {
        return Err(ValidationError::LaneCapacityExceeded);
    }
    Ok(())
}
