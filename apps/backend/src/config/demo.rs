//! Rooms seated at boot for local play.
//!
//! Membership lives outside this service, so a bare binary has no rooms.
//! `MAFIA_DEMO_ROOMS` seeds the built-in in-memory store, e.g.
//! `7:101,102,103,104,105,106;8:201,202,203,204,205,206`.

use crate::domain::game_types::{PlayerId, RoomId, NO_PLAYER};
use crate::error::AppError;

/// One room to seat at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRoom {
    pub room_id: RoomId,
    pub players: Vec<PlayerId>,
}

/// Read `MAFIA_DEMO_ROOMS`. Unset or blank means no demo rooms.
pub fn demo_rooms_from_env() -> Result<Vec<DemoRoom>, AppError> {
    demo_rooms_from_lookup(|key| std::env::var(key).ok())
}

pub fn demo_rooms_from_lookup<F>(lookup: F) -> Result<Vec<DemoRoom>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("MAFIA_DEMO_ROOMS") {
        Some(raw) => parse_demo_rooms(&raw),
        None => Ok(Vec::new()),
    }
}

/// Parse `room:player,player;room:player,...`.
pub fn parse_demo_rooms(raw: &str) -> Result<Vec<DemoRoom>, AppError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Result<DemoRoom, AppError> {
    let (room, players) = entry.split_once(':').ok_or_else(|| {
        AppError::config(format!(
            "MAFIA_DEMO_ROOMS entry '{entry}' must look like 'room:player,player'"
        ))
    })?;

    let room_id = parse_id(room, entry)?;
    let players = players
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_id(id, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DemoRoom { room_id, players })
}

fn parse_id(raw: &str, entry: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id != NO_PLAYER => Ok(id),
        _ => Err(AppError::config(format!(
            "MAFIA_DEMO_ROOMS entry '{entry}' has invalid id '{}'",
            raw.trim()
        ))),
    }
}
