use super::GameFlowService;
use crate::domain::game_types::RoomId;
use crate::domain::room::RoomMeta;
use crate::domain::state::GameState;
use crate::AppError;

impl GameFlowService {
    /// Current room and decoded game state. Read-only; takes no room lock.
    pub async fn get_state(&self, room_id: RoomId) -> Result<(RoomMeta, GameState), AppError> {
        let (room, blob) = self.store.load(room_id).await?;
        let state = GameState::from_blob(&blob)?;
        Ok((room, state))
    }
}
