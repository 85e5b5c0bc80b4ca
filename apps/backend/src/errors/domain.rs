//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and storage-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Rule violations raised while validating a game operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// The room has not started a game (also covers "not started" on phase advance).
    GameNotStarted,
    /// `StartGame` on a room that is already playing.
    GameAlreadyStarted,
    /// Fewer seated players than the configured minimum.
    NotEnoughPlayers,
    /// Action attempted outside the phase it belongs to (votes outside the day).
    PhaseMismatch,
    /// Actor is dead or not seated in this game.
    InactivePlayer,
    /// Target absent, or dead where aliveness is required.
    InvalidTarget,
    UnknownAbility,
    AbilityNotGranted,
    /// Ability's allowed phase does not include the current phase.
    WrongPhase,
    /// Ability is restricted to a side the player does not belong to.
    WrongSide,
    AlreadyUsedThisPeriod,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// A save raced with another save of the same room.
    OptimisticLock,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// A persisted state blob could not be decoded.
    DataCorruption,
    StoreUnavailable,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The validation kind, if this is a rule violation.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }

    /// True when the error means stored data is unreadable rather than the
    /// request being wrong.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, DomainError::Infra(InfraErrorKind::DataCorruption, _))
    }
}
