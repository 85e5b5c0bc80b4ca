//! In-process room store backed by `DashMap`.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::game_types::{PlayerId, RoomId};
use crate::domain::room::RoomMeta;
use crate::domain::state_codec::StateBlob;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::rooms::RoomStore;

#[derive(Debug, Clone)]
struct StoredRoom {
    meta: RoomMeta,
    blob: StateBlob,
}

/// Room store kept in memory; rooms live as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rooms: DashMap<RoomId, StoredRoom>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or reset a waiting room with the given seating and no game.
    ///
    /// Stands in for the membership component, which owns seating.
    pub fn seat_room(
        &self,
        room_id: RoomId,
        players: impl IntoIterator<Item = PlayerId>,
    ) -> RoomMeta {
        let mut meta = RoomMeta::waiting(room_id, players);
        if let Some(existing) = self.rooms.get(&room_id) {
            meta.version = existing.meta.version + 1;
        }
        self.rooms.insert(
            room_id,
            StoredRoom {
                meta: meta.clone(),
                blob: StateBlob::empty(),
            },
        );
        debug!(room_id, players = meta.players.len(), "Room seated");
        meta
    }

    /// Overwrite a room's blob without a version check.
    ///
    /// Test hook for simulating storage damage.
    pub fn put_raw_blob(&self, room_id: RoomId, blob: StateBlob) -> bool {
        match self.rooms.get_mut(&room_id) {
            Some(mut stored) => {
                stored.blob = blob;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn room_not_found(room_id: RoomId) -> DomainError {
    DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found"))
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn load(&self, room_id: RoomId) -> Result<(RoomMeta, StateBlob), DomainError> {
        self.rooms
            .get(&room_id)
            .map(|stored| (stored.meta.clone(), stored.blob.clone()))
            .ok_or_else(|| room_not_found(room_id))
    }

    async fn save(
        &self,
        room_id: RoomId,
        meta: &RoomMeta,
        blob: &StateBlob,
    ) -> Result<RoomMeta, DomainError> {
        // The entry guard holds the shard lock, so check-and-write is atomic.
        match self.rooms.entry(room_id) {
            Entry::Vacant(_) => Err(room_not_found(room_id)),
            Entry::Occupied(mut entry) => {
                let current = entry.get().meta.version;
                if current != meta.version {
                    return Err(DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Room {room_id} was modified concurrently (expected version {}, actual version {current})",
                            meta.version
                        ),
                    ));
                }
                let mut saved = meta.clone();
                saved.id = room_id;
                saved.version = current + 1;
                entry.insert(StoredRoom {
                    meta: saved.clone(),
                    blob: blob.clone(),
                });
                Ok(saved)
            }
        }
    }
}
