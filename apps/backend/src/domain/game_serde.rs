//! Serialization and deserialization for game-session wire types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::game_types::{Phase, PlayerId, Team};

// Phase serde ("night" / "day" / "")
impl Serialize for Phase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phase::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid phase: {s}")))
    }
}

// Team serde (lower-case name, unknown names preserved)
impl Serialize for Team {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Team {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Team::parse(&s).ok_or_else(|| serde::de::Error::custom("Team must not be empty"))
    }
}

/// `Option<Team>` written as a plain string, `""` standing for `None`.
pub mod team_or_empty {
    use super::*;

    pub fn serialize<S>(team: &Option<Team>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(team.as_ref().map(Team::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Team>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().and_then(Team::parse))
    }
}

/// Optional ability target written as an id where `0` means "no target".
///
/// `Some(0)` would not survive the trip; seating and ability checks keep it
/// out of stored state.
pub mod target_or_zero {
    use super::*;

    pub fn serialize<S>(target: &Option<PlayerId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(target.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PlayerId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<PlayerId>::deserialize(deserializer)?;
        Ok(raw.filter(|id| *id != 0))
    }
}

/// Treat an explicit JSON `null` like a missing field for collections.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
