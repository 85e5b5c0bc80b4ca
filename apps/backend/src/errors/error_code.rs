//! Error codes for the mafia backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in problem-details responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid room ID in the path
    InvalidRoomId,
    /// Malformed request body
    BadRequest,
    /// General validation error
    ValidationError,

    // Game rules
    GameNotStarted,
    GameAlreadyStarted,
    NotEnoughPlayers,
    /// Action not allowed in the room's current phase
    PhaseMismatch,
    /// Actor is dead or not seated
    InactivePlayer,
    InvalidTarget,
    UnknownAbility,
    AbilityNotGranted,
    /// Ability not usable in the current phase
    WrongPhase,
    /// Ability restricted to another side
    WrongSide,
    AlreadyUsedThisPeriod,

    // Resource Not Found
    RoomNotFound,
    NotFound,

    // Conflicts
    /// Room was saved by a concurrent operation
    OptimisticLock,
    Conflict,

    // System Errors
    /// Room store unavailable
    StoreUnavailable,
    InternalError,
    ConfigError,
    /// Persisted game state could not be decoded
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRoomId => "INVALID_ROOM_ID",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InactivePlayer => "INACTIVE_PLAYER",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::UnknownAbility => "UNKNOWN_ABILITY",
            Self::AbilityNotGranted => "ABILITY_NOT_GRANTED",
            Self::WrongPhase => "WRONG_PHASE",
            Self::WrongSide => "WRONG_SIDE",
            Self::AlreadyUsedThisPeriod => "ALREADY_USED_THIS_PERIOD",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
