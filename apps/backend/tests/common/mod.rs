#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use std::sync::Arc;

use backend::adapters::{InMemoryRoomStore, StaticCatalog};
use backend::config::GameConfig;
use backend::domain::game_types::{PlayerId, RoomId};
use backend::domain::state::GameState;
use backend::repos::{RoleCatalog, RoomStore};
use backend::services::events::CollectingEventSink;
use backend::services::game_flow::GameFlowService;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const ROOM: RoomId = 7;

/// Seed used wherever a test needs reproducible role assignment.
pub const SEED: u64 = 20_240_601;

/// Seat ids `101..=100+n`, in seating order.
pub fn players(n: usize) -> Vec<PlayerId> {
    (101..).take(n).collect()
}

/// A service over an in-memory store, with handles to the store and events.
pub struct Harness {
    pub store: Arc<InMemoryRoomStore>,
    pub events: Arc<CollectingEventSink>,
    pub service: Arc<GameFlowService>,
}

pub fn harness() -> Harness {
    harness_with(
        Arc::new(StaticCatalog::builtin()),
        GameConfig::default().with_rng_seed(SEED),
    )
}

pub fn harness_with(catalog: Arc<dyn RoleCatalog>, config: GameConfig) -> Harness {
    let store = Arc::new(InMemoryRoomStore::new());
    let events = Arc::new(CollectingEventSink::new());
    let service = GameFlowService::new(store.clone(), catalog, config)
        .with_event_sink(events.clone());
    Harness {
        store,
        events,
        service: Arc::new(service),
    }
}

impl Harness {
    /// Seat `n` players in `ROOM` and start the game.
    pub async fn started(n: usize) -> Self {
        let harness = harness();
        harness.store.seat_room(ROOM, players(n));
        harness
            .service
            .start_game(ROOM)
            .await
            .expect("start_game should succeed");
        harness.events.take();
        harness
    }

    pub async fn state(&self) -> GameState {
        self.service.get_state(ROOM).await.expect("get_state").1
    }

    pub async fn version(&self) -> u64 {
        self.store.load(ROOM).await.expect("load").0.version
    }

    /// Edit the stored game state directly, bypassing the service.
    ///
    /// Stands in for effects this service does not apply, such as eliminations.
    pub async fn edit_state(&self, edit: impl FnOnce(&mut GameState)) {
        let (meta, blob) = self.store.load(ROOM).await.expect("load");
        let mut state = GameState::from_blob(&blob).expect("decode");
        edit(&mut state);
        self.store
            .save(ROOM, &meta, &state.to_blob().expect("encode"))
            .await
            .expect("save");
    }
}

/// The seated player holding `role`; panics when nobody does.
pub fn holder_of(state: &GameState, role: &str) -> PlayerId {
    state
        .assignments
        .iter()
        .find(|(_, assignment)| assignment.role == role)
        .map(|(id, _)| *id)
        .unwrap_or_else(|| panic!("no player holds {role}"))
}
