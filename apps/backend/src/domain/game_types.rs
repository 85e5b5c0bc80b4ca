//! Core game-session types: identifiers, Phase, Team, AbilityPhase, RoomStatus.

use serde::{Deserialize, Serialize};

pub type RoomId = u64;
pub type PlayerId = u64;

/// Player id that stands for "no player" on the wire.
pub const NO_PLAYER: PlayerId = 0;

/// Sub-period of a game day.
///
/// `Unset` only appears in the zero state produced from an empty blob; a
/// started game is always in `Night` or `Day`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    #[default]
    Unset,
    Night,
    Day,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Unset => "",
            Phase::Night => "night",
            Phase::Day => "day",
        }
    }

    pub fn parse(s: &str) -> Option<Phase> {
        match s {
            "" => Some(Phase::Unset),
            "night" => Some(Phase::Night),
            "day" => Some(Phase::Day),
            _ => None,
        }
    }
}

/// Alignment of a role or the side an ability is restricted to.
///
/// Teams are an open set in the catalog, so unknown names are kept verbatim
/// in `Other`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Team {
    Town,
    Mafia,
    Neutral,
    Other(String),
}

impl Team {
    pub fn as_str(&self) -> &str {
        match self {
            Team::Town => "town",
            Team::Mafia => "mafia",
            Team::Neutral => "neutral",
            Team::Other(name) => name,
        }
    }

    /// Parse a catalog team string. Empty means "no team" and yields `None`.
    pub fn parse(s: &str) -> Option<Team> {
        match s {
            "" => None,
            "town" => Some(Team::Town),
            "mafia" => Some(Team::Mafia),
            "neutral" => Some(Team::Neutral),
            other => Some(Team::Other(other.to_string())),
        }
    }
}

/// Phase(s) in which an ability may be invoked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityPhase {
    Night,
    Day,
    Both,
}

impl AbilityPhase {
    pub fn allows(self, phase: Phase) -> bool {
        match self {
            AbilityPhase::Both => true,
            AbilityPhase::Night => phase == Phase::Night,
            AbilityPhase::Day => phase == Phase::Day,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Waiting,
    Playing,
}
