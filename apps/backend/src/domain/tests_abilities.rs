use super::abilities::{use_ability, AbilityRequest};
use super::game_types::{Phase, PlayerId, RoomStatus, NO_PLAYER};
use super::phase_cycle::advance_phase;
use super::room::RoomMeta;
use super::state::{AbilityUsage, GameState, PlayerAssignment};
use super::test_state_helpers::*;
use crate::errors::domain::{DomainError, ValidationKind};

fn request(user_id: PlayerId, ability: &str, target: Option<PlayerId>) -> AbilityRequest<'_> {
    AbilityRequest {
        user_id,
        ability,
        target,
    }
}

fn kind(err: DomainError) -> ValidationKind {
    err.validation_kind()
        .cloned()
        .unwrap_or_else(|| panic!("expected a validation error, got {err:?}"))
}

fn sync_room(room: &mut RoomMeta, state: &GameState) {
    room.phase = state.phase;
    room.day_count = state.day_count;
}

#[test]
fn accepted_use_is_recorded_and_marked() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let record = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DOCTOR, "protector", Some(VILLAGER)),
        at(),
    )
    .unwrap();

    assert_eq!(record.user_id, DOCTOR);
    assert_eq!(record.ability, "protector");
    assert_eq!(record.target_id, Some(VILLAGER));
    assert_eq!(record.phase, Phase::Night);
    assert_eq!(record.day, 1);
    assert_eq!(state.abilities, vec![record]);
    assert_eq!(
        state.assignments[&DOCTOR].used_abilities["protector"],
        AbilityUsage {
            day: 1,
            phase: Phase::Night
        }
    );
}

#[test]
fn untargeted_use_records_no_target() {
    let (room, mut state) = started_game(Phase::Day, 1);

    let record = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(NOSTRADAMUS, "nostradamus", None),
        at(),
    )
    .unwrap();
    assert_eq!(record.target_id, None);
}

#[test]
fn waiting_room_rejects_abilities() {
    let (mut room, mut state) = started_game(Phase::Night, 1);
    room.status = RoomStatus::Waiting;

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DOCTOR, "protector", None),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::GameNotStarted);
}

#[test]
fn dead_and_unseated_users_are_inactive() {
    let (room, mut state) = started_game(Phase::Night, 1);

    for user in [DEAD_MAFIA, UNSEATED] {
        let err = use_ability(
            &mut state,
            &room,
            &catalog(),
            &request(user, "nato", None),
            at(),
        )
        .unwrap_err();
        assert_eq!(kind(err), ValidationKind::InactivePlayer);
    }
}

#[test]
fn dead_user_is_rejected_before_catalog_lookup() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DEAD_MAFIA, "no_such_ability", None),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::InactivePlayer);
}

#[test]
fn unknown_code_is_rejected() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(GODFATHER, "teleport", None),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::UnknownAbility);
}

#[test]
fn role_must_grant_the_code() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DOCTOR, "godfather", Some(VILLAGER)),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::AbilityNotGranted);
}

#[test]
fn grant_is_checked_before_phase() {
    // lawyer is day-only and not granted to the detective
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DETECTIVE, "lawyer", None),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::AbilityNotGranted);
}

#[test]
fn unrestricted_role_may_use_any_side_free_ability() {
    let (room, mut state) = started_game(Phase::Night, 1);

    // Villager has no ability list and no team.
    use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(VILLAGER, "protector", Some(DETECTIVE)),
        at(),
    )
    .unwrap();
    use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(VILLAGER, "bell", None),
        at(),
    )
    .unwrap();
    assert_eq!(state.abilities.len(), 2);
}

#[test]
fn night_ability_during_day_is_wrong_phase() {
    let (room, mut state) = started_game(Phase::Day, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DETECTIVE, "sherlock_holmes", Some(GODFATHER)),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::WrongPhase);
}

#[test]
fn mafia_ability_on_town_player_is_wrong_side() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(DOCTOR, "nato", Some(GODFATHER)),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::WrongSide);
    assert!(state.abilities.is_empty());
    assert!(state.assignments[&DOCTOR].used_abilities.is_empty());
}

#[test]
fn neutral_ability_is_open_to_every_side() {
    let (room, mut state) = started_game(Phase::Night, 1);

    use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(NOSTRADAMUS, "nostradamus", Some(GODFATHER)),
        at(),
    )
    .unwrap();
}

#[test]
fn target_must_be_seated_and_alive() {
    let (room, mut state) = started_game(Phase::Night, 1);

    for target in [DEAD_MAFIA, UNSEATED] {
        let err = use_ability(
            &mut state,
            &room,
            &catalog(),
            &request(GODFATHER, "godfather", Some(target)),
            at(),
        )
        .unwrap_err();
        assert_eq!(kind(err), ValidationKind::InvalidTarget);
    }
    assert!(state.assignments[&GODFATHER].used_abilities.is_empty());
}

#[test]
fn reserved_zero_target_is_rejected_and_state_round_trips() {
    let (room, mut state) = started_game(Phase::Night, 1);
    // Even if a store hands back an assignment under id 0, it is not a target
    state
        .assignments
        .insert(NO_PLAYER, PlayerAssignment::new("Villager", None, vec![]));

    let err = use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(VILLAGER, "bell", Some(NO_PLAYER)),
        at(),
    )
    .unwrap_err();
    assert_eq!(kind(err), ValidationKind::InvalidTarget);
    assert!(state.abilities.is_empty());

    use_ability(
        &mut state,
        &room,
        &catalog(),
        &request(VILLAGER, "bell", Some(GODFATHER)),
        at(),
    )
    .unwrap();
    let back = GameState::from_blob(&state.to_blob().unwrap()).unwrap();
    assert_eq!(back, state);
}

#[test]
fn second_use_in_same_period_is_rejected_even_with_new_target() {
    let (room, mut state) = started_game(Phase::Night, 1);
    let catalog = catalog();

    use_ability(
        &mut state,
        &room,
        &catalog,
        &request(GODFATHER, "godfather", Some(DOCTOR)),
        at(),
    )
    .unwrap();
    let err = use_ability(
        &mut state,
        &room,
        &catalog,
        &request(GODFATHER, "godfather", Some(DETECTIVE)),
        at(),
    )
    .unwrap_err();

    assert_eq!(kind(err), ValidationKind::AlreadyUsedThisPeriod);
    assert_eq!(state.abilities.len(), 1);
}

#[test]
fn different_codes_share_no_period_budget() {
    let (room, mut state) = started_game(Phase::Night, 1);
    let catalog = catalog();

    use_ability(
        &mut state,
        &room,
        &catalog,
        &request(GODFATHER, "godfather", Some(DOCTOR)),
        at(),
    )
    .unwrap();
    use_ability(
        &mut state,
        &room,
        &catalog,
        &request(GODFATHER, "nato", Some(DETECTIVE)),
        at(),
    )
    .unwrap();
    assert_eq!(state.abilities.len(), 2);
}

#[test]
fn both_phase_ability_is_usable_once_per_period() {
    let (mut room, mut state) = started_game(Phase::Night, 1);
    let catalog = catalog();
    let nato = request(GODFATHER, "nato", Some(DOCTOR));

    use_ability(&mut state, &room, &catalog, &nato, at()).unwrap();

    // night 1 -> day 1: same day, new phase
    advance_phase(&mut state, &room).unwrap();
    sync_room(&mut room, &state);
    use_ability(&mut state, &room, &catalog, &nato, at()).unwrap();
    let err = use_ability(&mut state, &room, &catalog, &nato, at()).unwrap_err();
    assert_eq!(kind(err), ValidationKind::AlreadyUsedThisPeriod);

    // day 1 -> night 2
    advance_phase(&mut state, &room).unwrap();
    sync_room(&mut room, &state);
    let record = use_ability(&mut state, &room, &catalog, &nato, at()).unwrap();
    assert_eq!((record.phase, record.day), (Phase::Night, 2));
    assert_eq!(state.abilities.len(), 3);
}
