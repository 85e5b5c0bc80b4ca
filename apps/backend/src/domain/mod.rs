//! Domain layer: pure game-session types and rules.
//!
//! Nothing here touches storage, locking or HTTP. Services load a
//! `GameState`, call into these functions, and commit the result.

pub mod abilities;
pub mod builtin_catalog;
pub mod catalog;
pub mod game_serde;
pub mod game_transition;
pub mod game_types;
pub mod phase_cycle;
pub mod role_assignment;
pub mod room;
pub mod seed_derivation;
pub mod state;
pub mod state_codec;
pub mod voting;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_abilities;
#[cfg(test)]
mod tests_voting;

pub use abilities::{use_ability, AbilityRequest};
pub use catalog::{AbilityDefinition, AbilityIndex, RoleDefinition};
pub use game_transition::{derive_game_events, GameEvent};
pub use game_types::{AbilityPhase, Phase, PlayerId, RoomId, RoomStatus, Team, NO_PLAYER};
pub use phase_cycle::advance_phase;
pub use room::RoomMeta;
pub use state::{AbilityInvocationRecord, AbilityUsage, GameState, PlayerAssignment, VoteRecord};
pub use state_codec::StateBlob;
pub use voting::cast_vote;
