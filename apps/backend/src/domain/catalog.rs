//! Read-only role and ability definitions as configured by admins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::game_serde::{null_as_default, team_or_empty};
use super::game_types::{AbilityPhase, Team};

/// A configured role. Immutable for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Vec<String>,
    #[serde(default, with = "team_or_empty")]
    pub team: Option<Team>,
    /// Concurrent holders. `0` means a single copy in the pool.
    #[serde(default)]
    pub max_count: u32,
}

impl RoleDefinition {
    pub fn new(name: impl Into<String>, team: Option<Team>, abilities: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            abilities: abilities.iter().map(|a| (*a).to_string()).collect(),
            team,
            max_count: 0,
        }
    }

    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Number of copies this role contributes to the assignment pool.
    pub fn pool_copies(&self) -> usize {
        self.max_count.max(1) as usize
    }
}

/// A configured ability, keyed by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub code: String,
    #[serde(default)]
    pub label: String,
    pub phase: AbilityPhase,
    /// `None` means any side may use it.
    #[serde(default, with = "team_or_empty")]
    pub side: Option<Team>,
    #[serde(default)]
    pub description: String,
}

impl AbilityDefinition {
    pub fn new(code: impl Into<String>, phase: AbilityPhase, side: Option<Team>) -> Self {
        Self {
            code: code.into(),
            label: String::new(),
            phase,
            side,
            description: String::new(),
        }
    }

    /// Whether a player on `team` may use this ability.
    ///
    /// Unrestricted and `neutral` abilities are open to everyone, and a
    /// player without a team is never rejected on side grounds.
    pub fn side_permits(&self, team: Option<&Team>) -> bool {
        match (&self.side, team) {
            (None, _) | (Some(Team::Neutral), _) | (_, None) => true,
            (Some(side), Some(team)) => side == team,
        }
    }
}

/// Ability lookup table keyed by ability code.
pub type AbilityIndex = HashMap<String, AbilityDefinition>;

/// Build an [`AbilityIndex`]; later duplicates of a code replace earlier ones.
pub fn index_abilities(abilities: impl IntoIterator<Item = AbilityDefinition>) -> AbilityIndex {
    abilities
        .into_iter()
        .map(|ability| (ability.code.clone(), ability))
        .collect()
}

/// Find a role definition by name.
pub fn find_role<'a>(roles: &'a [RoleDefinition], name: &str) -> Option<&'a RoleDefinition> {
    roles.iter().find(|role| role.name == name)
}
