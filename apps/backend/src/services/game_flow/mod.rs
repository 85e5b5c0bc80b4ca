//! Game flow orchestration: bridges the pure domain rules with the room store.
//!
//! Every mutating operation is one load-mutate-commit cycle under the room's
//! lock (see [`GameFlowService::run_mutation`]).

mod lifecycle;
mod mutation;
mod player_actions;
mod queries;

use std::sync::Arc;

pub use mutation::GameFlowMutationResult;

use crate::config::GameConfig;
use crate::repos::{RoleCatalog, RoomStore};
use crate::services::events::{EventSink, TracingEventSink};
use crate::services::room_locks::RoomLocks;

/// Game session service, shared across requests.
pub struct GameFlowService {
    store: Arc<dyn RoomStore>,
    catalog: Arc<dyn RoleCatalog>,
    events: Arc<dyn EventSink>,
    locks: RoomLocks,
    config: GameConfig,
}

impl GameFlowService {
    pub fn new(
        store: Arc<dyn RoomStore>,
        catalog: Arc<dyn RoleCatalog>,
        config: GameConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            events: Arc::new(TracingEventSink),
            locks: RoomLocks::new(),
            config,
        }
    }

    /// Replace the default tracing sink.
    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
