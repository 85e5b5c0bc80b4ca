use serde::{Deserialize, Serialize};

use super::game_types::{Phase, PlayerId, RoomId, RoomStatus, NO_PLAYER};

/// Room metadata as held by the room store.
///
/// `phase` and `day_count` mirror the embedded game state and are only ever
/// written together with it by the mutation commit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMeta {
    pub id: RoomId,
    pub status: RoomStatus,
    pub phase: Phase,
    pub day_count: u32,
    /// Seated players in seating order.
    pub players: Vec<PlayerId>,
    /// Bumped by the store on every successful save.
    pub version: u64,
}

impl RoomMeta {
    /// A waiting room with the given seating. Duplicate seats are dropped,
    /// keeping the first occurrence. Id `0` is reserved for "no target" and
    /// is never seated.
    pub fn waiting(id: RoomId, players: impl IntoIterator<Item = PlayerId>) -> Self {
        let mut seated: Vec<PlayerId> = Vec::new();
        for player in players {
            if player != NO_PLAYER && !seated.contains(&player) {
                seated.push(player);
            }
        }
        Self {
            id,
            status: RoomStatus::Waiting,
            phase: Phase::Unset,
            day_count: 0,
            players: seated,
            version: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == RoomStatus::Playing
    }
}
