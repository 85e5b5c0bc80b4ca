//! The single encode/decode pair between `GameState` and the opaque blob the
//! room store persists. Nothing else parses the blob.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Opaque serialized game state as stored alongside a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBlob(pub String);

impl StateBlob {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for StateBlob {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl GameState {
    /// Encode as the UTF-8 JSON blob persisted by the room store.
    pub fn to_blob(&self) -> Result<StateBlob, DomainError> {
        serde_json::to_string(self)
            .map(StateBlob)
            .map_err(|e| {
                DomainError::infra(
                    InfraErrorKind::Other("ENCODE".into()),
                    format!("Failed to encode game state: {e}"),
                )
            })
    }

    /// Decode a stored blob.
    ///
    /// An empty blob is the zero state (`Phase::Unset`, day 0, empty
    /// collections), not an error. Anything unparseable is data corruption.
    pub fn from_blob(blob: &StateBlob) -> Result<GameState, DomainError> {
        if blob.is_empty() {
            return Ok(GameState::default());
        }
        serde_json::from_str(blob.as_str()).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored game state is unreadable: {e}"),
            )
        })
    }
}
