use super::game_types::{Phase, RoomStatus};
use super::phase_cycle::advance_phase;
use super::test_state_helpers::*;
use super::voting::cast_vote;
use crate::errors::domain::ValidationKind;

#[test]
fn vote_during_day_is_recorded() {
    let (room, mut state) = started_game(Phase::Day, 2);

    let record = cast_vote(&mut state, &room, DOCTOR, GODFATHER, at()).unwrap();

    assert_eq!(record.voter, DOCTOR);
    assert_eq!(record.target, GODFATHER);
    assert_eq!(record.phase, Phase::Day);
    assert_eq!(record.day, 2);
    assert_eq!(record.timestamp, at());
    assert_eq!(state.votes, vec![record]);
}

#[test]
fn vote_at_night_is_phase_mismatch() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = cast_vote(&mut state, &room, DOCTOR, GODFATHER, at()).unwrap_err();

    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
    assert!(state.votes.is_empty());
}

#[test]
fn vote_before_start_is_phase_mismatch() {
    let (mut room, mut state) = started_game(Phase::Unset, 0);
    room.status = RoomStatus::Waiting;

    let err = cast_vote(&mut state, &room, DOCTOR, GODFATHER, at()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn phase_is_checked_before_voter() {
    let (room, mut state) = started_game(Phase::Night, 1);

    let err = cast_vote(&mut state, &room, UNSEATED, UNSEATED, at()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn dead_or_unseated_voter_is_inactive() {
    let (room, mut state) = started_game(Phase::Day, 1);

    for voter in [DEAD_MAFIA, UNSEATED] {
        let err = cast_vote(&mut state, &room, voter, GODFATHER, at()).unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::InactivePlayer));
    }
    assert!(state.votes.is_empty());
}

#[test]
fn unseated_target_is_invalid() {
    let (room, mut state) = started_game(Phase::Day, 1);

    let err = cast_vote(&mut state, &room, DOCTOR, UNSEATED, at()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidTarget));
}

#[test]
fn dead_target_and_self_vote_are_accepted() {
    let (room, mut state) = started_game(Phase::Day, 1);

    cast_vote(&mut state, &room, DOCTOR, DEAD_MAFIA, at()).unwrap();
    cast_vote(&mut state, &room, VILLAGER, VILLAGER, at()).unwrap();

    assert_eq!(state.votes.len(), 2);
}

#[test]
fn re_votes_append_and_latest_wins() {
    let (room, mut state) = started_game(Phase::Day, 1);

    cast_vote(&mut state, &room, DOCTOR, GODFATHER, at()).unwrap();
    cast_vote(&mut state, &room, DOCTOR, NOSTRADAMUS, at()).unwrap();
    cast_vote(&mut state, &room, DETECTIVE, GODFATHER, at()).unwrap();

    assert_eq!(state.votes.len(), 3);
    let latest = state.latest_votes(1);
    assert_eq!(latest[&DOCTOR], NOSTRADAMUS);
    assert_eq!(latest[&DETECTIVE], GODFATHER);
}

#[test]
fn votes_carry_the_current_day() {
    let (mut room, mut state) = started_game(Phase::Day, 1);
    cast_vote(&mut state, &room, DOCTOR, GODFATHER, at()).unwrap();

    // day 1 -> night 2 -> day 2
    advance_phase(&mut state, &room).unwrap();
    advance_phase(&mut state, &room).unwrap();
    room.phase = state.phase;
    room.day_count = state.day_count;

    let record = cast_vote(&mut state, &room, DOCTOR, DETECTIVE, at()).unwrap();
    assert_eq!(record.day, 2);
    assert_eq!(state.latest_votes(1)[&DOCTOR], GODFATHER);
    assert_eq!(state.latest_votes(2)[&DOCTOR], DETECTIVE);
}
