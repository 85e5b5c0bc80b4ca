use async_trait::async_trait;

use crate::domain::game_types::RoomId;
use crate::domain::room::RoomMeta;
use crate::domain::state_codec::StateBlob;
use crate::errors::domain::DomainError;

/// Durable room metadata plus one opaque game-state blob per room.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Load a room and its blob. A room that never stored a game yields an
    /// empty blob. Unknown rooms are `NotFound(Room)`.
    async fn load(&self, room_id: RoomId) -> Result<(RoomMeta, StateBlob), DomainError>;

    /// Persist metadata and blob together.
    ///
    /// `meta.version` must equal the stored version, otherwise nothing is
    /// written and `Conflict(OptimisticLock)` is returned. On success the
    /// stored metadata is returned with its version bumped.
    async fn save(
        &self,
        room_id: RoomId,
        meta: &RoomMeta,
        blob: &StateBlob,
    ) -> Result<RoomMeta, DomainError>;
}
