// apps/backend/src/domain/game_transition.rs

use serde::Serialize;

use crate::domain::game_types::{Phase, PlayerId, RoomId, RoomStatus};
use crate::domain::room::RoomMeta;

/// Notification-worthy outcome of a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Edge-triggered: room moved from waiting to playing.
    GameStarted { room_id: RoomId, players: Vec<PlayerId> },

    /// Edge-triggered: `(phase, day)` changed.
    PhaseChanged {
        room_id: RoomId,
        phase: Phase,
        day: u32,
    },

    /// Explicit: a vote was appended.
    VoteCast {
        room_id: RoomId,
        voter: PlayerId,
        target: PlayerId,
        day: u32,
    },

    /// Explicit: an ability use was accepted. The target is left out so
    /// broadcasting the event does not leak it.
    AbilityUsed {
        room_id: RoomId,
        user_id: PlayerId,
        ability: String,
    },
}

/// Derive edge-triggered events from room metadata before/after a mutation.
pub fn derive_game_events(before: &RoomMeta, after: &RoomMeta) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // 1. Game start (waiting -> playing)
    if before.status == RoomStatus::Waiting && after.status == RoomStatus::Playing {
        events.push(GameEvent::GameStarted {
            room_id: after.id,
            players: after.players.clone(),
        });
    }

    // 2. Period change. A start also lands in the opening period.
    if (before.phase, before.day_count) != (after.phase, after.day_count) {
        events.push(GameEvent::PhaseChanged {
            room_id: after.id,
            phase: after.phase,
            day: after.day_count,
        });
    }

    events
}
