use std::sync::Arc;

use crate::services::game_flow::GameFlowService;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub game_flow: Arc<GameFlowService>,
}

impl AppState {
    pub fn new(game_flow: GameFlowService) -> Self {
        Self {
            game_flow: Arc::new(game_flow),
        }
    }

    pub fn game_flow(&self) -> &GameFlowService {
        &self.game_flow
    }
}
