// Proptest generators for game-session types.
// Generators build valid values by construction instead of filtering.

use std::collections::BTreeMap;

use proptest::prelude::*;
use time::OffsetDateTime;

use crate::domain::catalog::RoleDefinition;
use crate::domain::game_types::{Phase, PlayerId, Team};
use crate::domain::state::{
    AbilityInvocationRecord, AbilityUsage, GameState, PlayerAssignment, VoteRecord,
};

pub fn phase() -> impl Strategy<Value = Phase> {
    prop_oneof![Just(Phase::Unset), Just(Phase::Night), Just(Phase::Day)]
}

pub fn team() -> impl Strategy<Value = Option<Team>> {
    prop_oneof![
        Just(None),
        Just(Some(Team::Town)),
        Just(Some(Team::Mafia)),
        Just(Some(Team::Neutral)),
        "[a-z]{1,8}".prop_map(|s| Team::parse(&s)),
    ]
}

pub fn ability_code() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

/// Whole-second UTC instants between 2000 and 2100, plus nanoseconds.
pub fn timestamp() -> impl Strategy<Value = OffsetDateTime> {
    (946_684_800i64..4_102_444_800i64, 0u32..1_000_000_000u32).prop_map(|(secs, nanos)| {
        OffsetDateTime::from_unix_timestamp(secs)
            .map(|t| t + time::Duration::nanoseconds(nanos as i64))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    })
}

pub fn assignment() -> impl Strategy<Value = PlayerAssignment> {
    (
        "[A-Za-z]{1,10}",
        team(),
        prop::collection::vec(ability_code(), 0..4),
        any::<bool>(),
        prop::collection::btree_map(ability_code(), (0u32..20, phase()), 0..3),
    )
        .prop_map(|(role, team, abilities, alive, used)| PlayerAssignment {
            role,
            team,
            abilities,
            alive,
            used_abilities: used
                .into_iter()
                .map(|(code, (day, phase))| (code, AbilityUsage { day, phase }))
                .collect(),
        })
}

pub fn vote() -> impl Strategy<Value = VoteRecord> {
    (1u64..50, 1u64..50, 0u32..20, timestamp()).prop_map(|(voter, target, day, timestamp)| {
        VoteRecord {
            voter,
            target,
            phase: Phase::Day,
            day,
            timestamp,
        }
    })
}

pub fn invocation() -> impl Strategy<Value = AbilityInvocationRecord> {
    (
        1u64..50,
        ability_code(),
        prop::option::of(1u64..50),
        phase(),
        0u32..20,
        timestamp(),
    )
        .prop_map(
            |(user_id, ability, target_id, phase, day, timestamp)| AbilityInvocationRecord {
                user_id,
                ability,
                target_id,
                phase,
                day,
                timestamp,
            },
        )
}

pub fn game_state() -> impl Strategy<Value = GameState> {
    (
        phase(),
        0u32..30,
        prop::collection::btree_map(1u64..1_000, assignment(), 0..12),
        prop::collection::vec(vote(), 0..8),
        prop::collection::vec(invocation(), 0..8),
    )
        .prop_map(|(phase, day_count, assignments, votes, abilities)| GameState {
            phase,
            day_count,
            assignments: assignments.into_iter().collect::<BTreeMap<_, _>>(),
            votes,
            abilities,
        })
}

pub fn role_table() -> impl Strategy<Value = Vec<RoleDefinition>> {
    prop::collection::vec(("[A-Z][a-z]{2,8}", team(), 0u32..4), 0..6).prop_map(|rows| {
        rows.into_iter()
            .map(|(name, team, max)| RoleDefinition::new(name, team, &[]).with_max_count(max))
            .collect()
    })
}

/// Distinct player ids in seating order.
pub fn seating() -> impl Strategy<Value = Vec<PlayerId>> {
    prop::collection::btree_set(1u64..10_000, 0..25)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}
