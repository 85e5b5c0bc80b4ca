use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::{InMemoryRoomStore, StaticCatalog};
use crate::config::{DemoRoom, GameConfig};
use crate::error::AppError;
use crate::repos::{RoleCatalog, RoomStore};
use crate::services::events::EventSink;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main).
///
/// Unset collaborators default to an in-memory room store (seated with any
/// demo rooms), the built-in catalog and the tracing event sink.
#[derive(Default)]
pub struct StateBuilder {
    config: Option<GameConfig>,
    store: Option<Arc<dyn RoomStore>>,
    catalog: Option<Arc<dyn RoleCatalog>>,
    events: Option<Arc<dyn EventSink>>,
    demo_rooms: Vec<DemoRoom>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read game configuration from the environment at build time.
    pub fn with_env_config(mut self) -> Result<Self, AppError> {
        self.config = Some(GameConfig::from_env()?);
        Ok(self)
    }

    pub fn with_store(mut self, store: Arc<dyn RoomStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn RoleCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Rooms to seat in the default in-memory store.
    pub fn with_demo_rooms(mut self, rooms: Vec<DemoRoom>) -> Self {
        self.demo_rooms = rooms;
        self
    }

    pub fn build(self) -> AppState {
        let store = match self.store {
            Some(store) => {
                if !self.demo_rooms.is_empty() {
                    warn!(
                        rooms = self.demo_rooms.len(),
                        "Demo rooms ignored for a caller-supplied store"
                    );
                }
                store
            }
            None => {
                let store = InMemoryRoomStore::new();
                for room in &self.demo_rooms {
                    store.seat_room(room.room_id, room.players.iter().copied());
                }
                if !store.is_empty() {
                    info!(rooms = store.len(), "Seated demo rooms");
                }
                Arc::new(store) as Arc<dyn RoomStore>
            }
        };
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(StaticCatalog::builtin()) as Arc<dyn RoleCatalog>);
        let mut service = GameFlowService::new(store, catalog, self.config.unwrap_or_default());
        if let Some(events) = self.events {
            service = service.with_event_sink(events);
        }
        AppState::new(service)
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
