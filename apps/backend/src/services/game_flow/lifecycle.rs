use tracing::info;

use super::mutation::GameFlowMutationResult;
use super::GameFlowService;
use crate::domain::game_types::{RoomId, RoomStatus};
use crate::domain::phase_cycle::{self, OPENING_PERIOD};
use crate::domain::role_assignment::{assign_roles, seeded_rng};
use crate::domain::room::RoomMeta;
use crate::domain::seed_derivation::{derive_assignment_seed, entropy_seed};
use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::AppError;

impl GameFlowService {
    /// Start a game: assign roles to every seated player and open night 1.
    ///
    /// Fails with `GameAlreadyStarted` on a playing room and
    /// `NotEnoughPlayers` below the configured minimum. A catalog failure
    /// aborts before the room is touched.
    pub async fn start_game(&self, room_id: RoomId) -> Result<GameFlowMutationResult, AppError> {
        let roles = self.catalog.list_roles().await?;
        let min_players = self.config.min_players;
        let filler = self.config.filler_role.as_str();
        let base_seed = self.config.rng_seed;

        let ((), result) = self
            .run_mutation(room_id, |room, state| {
                if room.is_playing() {
                    return Err(DomainError::validation(
                        ValidationKind::GameAlreadyStarted,
                        format!("Room {room_id} already has a game in progress"),
                    )
                    .into());
                }
                if room.players.len() < min_players {
                    return Err(DomainError::validation(
                        ValidationKind::NotEnoughPlayers,
                        format!(
                            "At least {min_players} players are required, {} seated",
                            room.players.len()
                        ),
                    )
                    .into());
                }

                let seed = match base_seed {
                    Some(base) => derive_assignment_seed(base, room_id, room.version),
                    None => entropy_seed(),
                };
                let mut rng = seeded_rng(seed);

                let (phase, day) = OPENING_PERIOD;
                let mut fresh = GameState::new(phase, day);
                fresh.assignments = assign_roles(&room.players, &roles, filler, &mut rng);
                *state = fresh;
                room.status = RoomStatus::Playing;
                Ok(((), Vec::new()))
            })
            .await?;

        info!(
            room_id,
            players = result.state.assignments.len(),
            version = result.room.version,
            "Game started"
        );
        Ok(result)
    }

    /// Move a started game to its next period and return the saved room.
    pub async fn advance_phase(&self, room_id: RoomId) -> Result<RoomMeta, AppError> {
        let ((phase, day), result) = self
            .run_mutation(room_id, |room, state| {
                let period = phase_cycle::advance_phase(state, room)?;
                Ok((period, Vec::new()))
            })
            .await?;

        info!(room_id, phase = phase.as_str(), day, "Phase advanced");
        Ok(result.room)
    }
}
