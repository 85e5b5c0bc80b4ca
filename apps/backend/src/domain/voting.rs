//! Day-phase vote validation and ledger append.

use time::OffsetDateTime;

use super::game_types::{Phase, PlayerId};
use super::room::RoomMeta;
use super::state::{GameState, VoteRecord};
use crate::errors::domain::{DomainError, ValidationKind};

/// Validate and record a vote.
///
/// Checks run in order and the first failure wins:
/// 1. the room is in the day phase (`PhaseMismatch`)
/// 2. the voter is seated and alive (`InactivePlayer`)
/// 3. the target is seated (`InvalidTarget`); dead targets are accepted
///
/// Every call appends; earlier votes by the same voter are kept.
pub fn cast_vote(
    state: &mut GameState,
    room: &RoomMeta,
    voter: PlayerId,
    target: PlayerId,
    at: OffsetDateTime,
) -> Result<VoteRecord, DomainError> {
    if room.phase != Phase::Day {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!(
                "Votes are only accepted during the day (room is in '{}')",
                room.phase.as_str()
            ),
        ));
    }

    state.require_active(voter)?;

    if !state.assignments.contains_key(&target) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTarget,
            format!("Player {target} is not seated in this game"),
        ));
    }

    let record = VoteRecord {
        voter,
        target,
        phase: Phase::Day,
        day: state.day_count,
        timestamp: at,
    };
    state.votes.push(record.clone());
    Ok(record)
}
