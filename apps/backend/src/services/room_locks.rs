//! One async mutex per room.
//!
//! Every mutation holds its room's guard across load, mutate and save, so
//! two writers on the same room never read the same version. Different
//! rooms never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::game_types::RoomId;

#[derive(Debug, Default)]
pub struct RoomLocks {
    locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

/// Exclusive access to one room. Dropping it releases the room and forgets
/// the room's mutex once nobody else holds or waits on it.
#[derive(Debug)]
pub struct RoomGuard<'a> {
    room_id: RoomId,
    guard: Option<OwnedMutexGuard<()>>,
    locks: &'a DashMap<RoomId, Arc<Mutex<()>>>,
}

impl Drop for RoomGuard<'_> {
    fn drop(&mut self) {
        // Release first so our own Arc no longer counts
        self.guard.take();
        self.locks
            .remove_if(&self.room_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `room_id`.
    ///
    /// The guard releases the room when dropped, including when the holding
    /// future is cancelled.
    pub async fn acquire(&self, room_id: RoomId) -> RoomGuard<'_> {
        // Clone the Arc out so no map shard lock is held across the await
        let lock = self
            .locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        RoomGuard {
            room_id,
            guard: Some(guard),
            locks: &self.locks,
        }
    }

    /// Number of rooms currently held or waited on.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
