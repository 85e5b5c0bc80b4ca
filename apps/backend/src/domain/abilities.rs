//! Ability invocation: validation against the catalog and per-period bookkeeping.
//!
//! Only legality and the ledger live here. What an ability *does* (saving,
//! killing, converting) is applied by whatever consumes `state.abilities`.

use time::OffsetDateTime;

use super::catalog::AbilityIndex;
use super::game_types::{PlayerId, NO_PLAYER};
use super::room::RoomMeta;
use super::state::{AbilityInvocationRecord, AbilityUsage, GameState};
use crate::errors::domain::{DomainError, ValidationKind};

/// A player's request to use an ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRequest<'a> {
    pub user_id: PlayerId,
    pub ability: &'a str,
    /// `None` for abilities used without a target.
    pub target: Option<PlayerId>,
}

/// Validate and record an ability use.
///
/// Checks, first failure wins:
/// 1. room is playing (`GameNotStarted`)
/// 2. user seated and alive (`InactivePlayer`)
/// 3. code is in the catalog (`UnknownAbility`)
/// 4. role grants the code; an empty role list grants everything (`AbilityNotGranted`)
/// 5. ability phase allows the room's phase (`WrongPhase`)
/// 6. ability side matches the player's team (`WrongSide`)
/// 7. target, when given, is a real id, seated and alive (`InvalidTarget`)
/// 8. code not already used in this `(day, phase)` (`AlreadyUsedThisPeriod`)
///
/// The usage marker is keyed by code only, so re-targeting does not bypass 8.
pub fn use_ability(
    state: &mut GameState,
    room: &RoomMeta,
    catalog: &AbilityIndex,
    request: &AbilityRequest<'_>,
    at: OffsetDateTime,
) -> Result<AbilityInvocationRecord, DomainError> {
    let AbilityRequest {
        user_id,
        ability: code,
        target,
    } = *request;

    if !room.is_playing() {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            format!("Room {} has not started a game", room.id),
        ));
    }

    let player = state.require_active(user_id)?;

    let definition = catalog.get(code).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::UnknownAbility,
            format!("Unknown ability '{code}'"),
        )
    })?;

    if !player.is_granted(code) {
        return Err(DomainError::validation(
            ValidationKind::AbilityNotGranted,
            format!("Role '{}' does not grant '{code}'", player.role),
        ));
    }

    if !definition.phase.allows(room.phase) {
        return Err(DomainError::validation(
            ValidationKind::WrongPhase,
            format!("'{code}' cannot be used during '{}'", room.phase.as_str()),
        ));
    }

    if !definition.side_permits(player.team.as_ref()) {
        return Err(DomainError::validation(
            ValidationKind::WrongSide,
            format!(
                "'{code}' is restricted to side '{}'",
                definition.side.as_ref().map(|s| s.as_str()).unwrap_or_default()
            ),
        ));
    }

    if let Some(target_id) = target {
        let target_alive = target_id != NO_PLAYER
            && state
                .assignment(target_id)
                .map(|a| a.alive)
                .unwrap_or(false);
        if !target_alive {
            return Err(DomainError::validation(
                ValidationKind::InvalidTarget,
                format!("Player {target_id} is not a living player in this game"),
            ));
        }
    }

    let period = AbilityUsage {
        day: state.day_count,
        phase: state.phase,
    };
    if player.used_abilities.get(code) == Some(&period) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyUsedThisPeriod,
            format!(
                "'{code}' was already used on day {} ({})",
                period.day,
                period.phase.as_str()
            ),
        ));
    }

    if let Some(player) = state.assignments.get_mut(&user_id) {
        player.used_abilities.insert(code.to_string(), period);
    }
    let record = AbilityInvocationRecord {
        user_id,
        ability: code.to_string(),
        target_id: target,
        phase: period.phase,
        day: period.day,
        timestamp: at,
    };
    state.abilities.push(record.clone());
    Ok(record)
}
