//! Night/day state machine.
//!
//! ```text
//! (night, d) --advance--> (day, d) --advance--> (night, d + 1)
//! ```

use super::game_types::Phase;
use super::room::RoomMeta;
use super::state::GameState;
use crate::errors::domain::{DomainError, ValidationKind};

/// Phase and day every game opens with.
pub const OPENING_PERIOD: (Phase, u32) = (Phase::Night, 1);

/// The period that follows `(phase, day)`.
///
/// The day counter only moves on the day-to-night edge. `Unset` follows the
/// day branch.
pub fn next_period(phase: Phase, day: u32) -> (Phase, u32) {
    match phase {
        Phase::Night => (Phase::Day, day),
        Phase::Day | Phase::Unset => (Phase::Night, day.saturating_add(1)),
    }
}

/// Advance a started game to its next period.
///
/// Mutates only `state`; the caller commits the room mirrors from it.
pub fn advance_phase(state: &mut GameState, room: &RoomMeta) -> Result<(Phase, u32), DomainError> {
    if !room.is_playing() {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            format!("Room {} has not started a game", room.id),
        ));
    }
    let (phase, day) = next_period(state.phase, state.day_count);
    state.phase = phase;
    state.day_count = day;
    Ok((phase, day))
}
