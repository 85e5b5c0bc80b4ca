//! Delivery of game events after a successful commit.

use parking_lot::Mutex;
use tracing::info;

use crate::domain::game_transition::GameEvent;

/// Receives events for mutations that have been persisted.
///
/// Called after the save, outside any domain validation, so a sink can
/// never cause a committed mutation to be reported as failed.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &GameEvent);
}

/// Default sink: one structured log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { room_id, players } => {
                info!(room_id, players = players.len(), "game.started");
            }
            GameEvent::PhaseChanged {
                room_id,
                phase,
                day,
            } => {
                info!(room_id, phase = phase.as_str(), day, "game.phase_changed");
            }
            GameEvent::VoteCast {
                room_id,
                voter,
                day,
                ..
            } => {
                info!(room_id, voter, day, "game.vote_cast");
            }
            GameEvent::AbilityUsed {
                room_id,
                user_id,
                ability,
            } => {
                info!(room_id, user_id, ability = %ability, "game.ability_used");
            }
        }
    }
}

/// Keeps every published event in memory.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: Mutex<Vec<GameEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    /// Drain collected events.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for CollectingEventSink {
    fn publish(&self, event: &GameEvent) {
        self.events.lock().push(event.clone());
    }
}
