use tracing::debug;

use super::GameFlowService;
use crate::domain::game_transition::{derive_game_events, GameEvent};
use crate::domain::game_types::RoomId;
use crate::domain::room::RoomMeta;
use crate::domain::state::GameState;
use crate::repos::RoomStore;
use crate::AppError;

/// Outcome of a committed mutation.
#[derive(Debug)]
pub struct GameFlowMutationResult {
    /// Room as saved, with the store's new version.
    pub room: RoomMeta,
    pub state: GameState,
    /// Derived and explicit events, in publish order.
    pub events: Vec<GameEvent>,
}

impl GameFlowMutationResult {
    pub fn final_version(&self) -> u64 {
        self.room.version
    }
}

/// Write the room and its game state together.
///
/// The room's phase/day mirrors are copied from `state` first, so the two can
/// never be saved out of step.
pub(super) async fn commit(
    store: &dyn RoomStore,
    room: &mut RoomMeta,
    state: &GameState,
) -> Result<RoomMeta, AppError> {
    room.phase = state.phase;
    room.day_count = state.day_count;
    let blob = state.to_blob()?;
    let saved = store.save(room.id, room, &blob).await?;
    Ok(saved)
}

impl GameFlowService {
    /// Run `mutation` against one room's freshly loaded state and commit it.
    ///
    /// The room lock is held for the whole cycle. If `mutation` fails, or the
    /// caller drops the future before the save, storage is left untouched.
    /// The closure returns its own value plus any explicit events; edge
    /// events (start, phase change) are derived from the before/after rooms.
    pub(super) async fn run_mutation<T, F>(
        &self,
        room_id: RoomId,
        mutation: F,
    ) -> Result<(T, GameFlowMutationResult), AppError>
    where
        F: FnOnce(&mut RoomMeta, &mut GameState) -> Result<(T, Vec<GameEvent>), AppError>,
    {
        let _guard = self.locks.acquire(room_id).await;

        let (before, blob) = self.store.load(room_id).await?;
        let mut state = GameState::from_blob(&blob)?;
        let mut room = before.clone();

        let (value, mut explicit_events) = mutation(&mut room, &mut state)?;

        let saved = commit(self.store.as_ref(), &mut room, &state).await?;
        debug!(
            room_id,
            old_version = before.version,
            new_version = saved.version,
            "Room committed"
        );

        let mut events = derive_game_events(&before, &saved);
        events.append(&mut explicit_events);
        for event in &events {
            self.events.publish(event);
        }

        Ok((
            value,
            GameFlowMutationResult {
                room: saved,
                state,
                events,
            },
        ))
    }
}
