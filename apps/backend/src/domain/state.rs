use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::game_serde::{null_as_default, target_or_zero, team_or_empty};
use super::game_types::{Phase, PlayerId, Team};
use crate::errors::domain::{DomainError, ValidationKind};

/// The `(day, phase)` in which a player last used an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUsage {
    pub day: u32,
    pub phase: Phase,
}

/// A seated player's role, team, granted abilities and alive status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssignment {
    pub role: String,
    #[serde(default, with = "team_or_empty")]
    pub team: Option<Team>,
    /// Empty means the role is unrestricted: any catalog ability may be used.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Vec<String>,
    pub alive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_abilities: BTreeMap<String, AbilityUsage>,
}

impl PlayerAssignment {
    pub fn new(role: impl Into<String>, team: Option<Team>, abilities: Vec<String>) -> Self {
        Self {
            role: role.into(),
            team,
            abilities,
            alive: true,
            used_abilities: BTreeMap::new(),
        }
    }

    /// Whether this player may invoke `code` at all (ignoring phase/side).
    pub fn is_granted(&self, code: &str) -> bool {
        self.abilities.is_empty() || self.abilities.iter().any(|a| a == code)
    }
}

/// One day-phase vote. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: PlayerId,
    pub target: PlayerId,
    pub phase: Phase,
    pub day: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// One accepted ability invocation. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInvocationRecord {
    pub user_id: PlayerId,
    pub ability: String,
    #[serde(default, with = "target_or_zero")]
    pub target_id: Option<PlayerId>,
    pub phase: Phase,
    pub day: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Entire in-progress game, sufficient for pure domain operations.
///
/// `phase`/`day_count` must equal the room's mirrors after every mutation.
/// The key set of `assignments` is fixed once the game starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub day_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignments: BTreeMap<PlayerId, PlayerAssignment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub votes: Vec<VoteRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Vec<AbilityInvocationRecord>,
}

impl GameState {
    /// Empty state for the given phase/day with all collections present.
    pub fn new(phase: Phase, day_count: u32) -> Self {
        Self {
            phase,
            day_count,
            ..Self::default()
        }
    }

    pub fn assignment(&self, player: PlayerId) -> Option<&PlayerAssignment> {
        self.assignments.get(&player)
    }

    /// Seated and alive; anything else is an inactive player.
    pub fn require_active(&self, player: PlayerId) -> Result<&PlayerAssignment, DomainError> {
        match self.assignments.get(&player) {
            Some(assignment) if assignment.alive => Ok(assignment),
            Some(_) => Err(DomainError::validation(
                ValidationKind::InactivePlayer,
                format!("Player {player} is dead"),
            )),
            None => Err(DomainError::validation(
                ValidationKind::InactivePlayer,
                format!("Player {player} is not seated in this game"),
            )),
        }
    }

    /// Mark a player as eliminated. Returns false when the player is not seated.
    ///
    /// Elimination policy lives outside this crate; this is the hook it uses.
    pub fn eliminate(&mut self, player: PlayerId) -> bool {
        match self.assignments.get_mut(&player) {
            Some(assignment) => {
                assignment.alive = false;
                true
            }
            None => false,
        }
    }

    /// Each voter's most recent vote on `day`, keyed by voter.
    ///
    /// The ledger keeps every re-vote; this is the view tallying should use.
    pub fn latest_votes(&self, day: u32) -> BTreeMap<PlayerId, PlayerId> {
        self.votes
            .iter()
            .filter(|v| v.day == day)
            .map(|v| (v.voter, v.target))
            .collect()
    }
}
