use time::OffsetDateTime;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::abilities::{self, AbilityRequest};
use crate::domain::game_transition::GameEvent;
use crate::domain::game_types::{PlayerId, RoomId};
use crate::domain::state::{AbilityInvocationRecord, VoteRecord};
use crate::domain::voting;
use crate::AppError;

impl GameFlowService {
    /// Record a day-phase vote.
    pub async fn vote(
        &self,
        room_id: RoomId,
        voter: PlayerId,
        target: PlayerId,
    ) -> Result<VoteRecord, AppError> {
        debug!(room_id, voter, target, "Casting vote");

        let (record, _) = self
            .run_mutation(room_id, |room, state| {
                let record =
                    voting::cast_vote(state, room, voter, target, OffsetDateTime::now_utc())?;
                let event = GameEvent::VoteCast {
                    room_id,
                    voter,
                    target,
                    day: record.day,
                };
                Ok((record, vec![event]))
            })
            .await?;

        info!(room_id, voter, day = record.day, "Vote recorded");
        Ok(record)
    }

    /// Validate and record an ability use.
    ///
    /// The ability catalog is read before the room is locked; a catalog
    /// failure aborts without touching the room.
    pub async fn use_ability(
        &self,
        room_id: RoomId,
        user_id: PlayerId,
        ability: &str,
        target: Option<PlayerId>,
    ) -> Result<AbilityInvocationRecord, AppError> {
        debug!(room_id, user_id, ability, ?target, "Using ability");

        let catalog = self.catalog.list_abilities().await?;
        let request = AbilityRequest {
            user_id,
            ability,
            target,
        };

        let (record, _) = self
            .run_mutation(room_id, |room, state| {
                let record = abilities::use_ability(
                    state,
                    room,
                    &catalog,
                    &request,
                    OffsetDateTime::now_utc(),
                )?;
                let event = GameEvent::AbilityUsed {
                    room_id,
                    user_id,
                    ability: record.ability.clone(),
                };
                Ok((record, vec![event]))
            })
            .await?;

        info!(
            room_id,
            user_id,
            ability,
            phase = record.phase.as_str(),
            day = record.day,
            "Ability recorded"
        );
        Ok(record)
    }
}
