//! Test-only fixtures for domain unit tests.

use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::catalog::{index_abilities, AbilityDefinition, AbilityIndex};
use crate::domain::game_types::{AbilityPhase, Phase, PlayerId, RoomStatus, Team};
use crate::domain::room::RoomMeta;
use crate::domain::state::{GameState, PlayerAssignment};

pub const GODFATHER: PlayerId = 1;
pub const DOCTOR: PlayerId = 2;
pub const DETECTIVE: PlayerId = 3;
pub const VILLAGER: PlayerId = 4;
pub const NOSTRADAMUS: PlayerId = 5;
pub const DEAD_MAFIA: PlayerId = 6;
pub const UNSEATED: PlayerId = 99;

pub fn at() -> OffsetDateTime {
    datetime!(2024-06-01 22:00 UTC)
}

/// Catalog covering every phase/side combination the tests need.
pub fn catalog() -> AbilityIndex {
    index_abilities([
        AbilityDefinition::new("nato", AbilityPhase::Both, Some(Team::Mafia)),
        AbilityDefinition::new("godfather", AbilityPhase::Night, Some(Team::Mafia)),
        AbilityDefinition::new("protector", AbilityPhase::Night, Some(Team::Town)),
        AbilityDefinition::new("sherlock_holmes", AbilityPhase::Night, Some(Team::Town)),
        AbilityDefinition::new("lawyer", AbilityPhase::Day, Some(Team::Town)),
        AbilityDefinition::new("nostradamus", AbilityPhase::Both, Some(Team::Neutral)),
        AbilityDefinition::new("bell", AbilityPhase::Both, None),
    ])
}

/// A playing room and matching state at `(phase, day)` with six seated players.
pub fn started_game(phase: Phase, day: u32) -> (RoomMeta, GameState) {
    let mut room = RoomMeta::waiting(
        42,
        [GODFATHER, DOCTOR, DETECTIVE, VILLAGER, NOSTRADAMUS, DEAD_MAFIA],
    );
    room.status = RoomStatus::Playing;
    room.phase = phase;
    room.day_count = day;

    let mut state = GameState::new(phase, day);
    let seat = |role: &str, team: Option<Team>, abilities: &[&str]| {
        PlayerAssignment::new(
            role,
            team,
            abilities.iter().map(|a| (*a).to_string()).collect(),
        )
    };
    state.assignments.insert(
        GODFATHER,
        seat("Godfather", Some(Team::Mafia), &["godfather", "nato"]),
    );
    state
        .assignments
        .insert(DOCTOR, seat("Doctor", Some(Team::Town), &["protector", "nato"]));
    state.assignments.insert(
        DETECTIVE,
        seat("Detective", Some(Team::Town), &["sherlock_holmes"]),
    );
    state.assignments.insert(VILLAGER, seat("Villager", None, &[]));
    state.assignments.insert(
        NOSTRADAMUS,
        seat("Nostradamus", Some(Team::Neutral), &["nostradamus"]),
    );
    let mut dead = seat("Mafia", Some(Team::Mafia), &["nato"]);
    dead.alive = false;
    state.assignments.insert(DEAD_MAFIA, dead);

    (room, state)
}
