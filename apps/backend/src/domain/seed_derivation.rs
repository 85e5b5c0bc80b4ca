//! RNG seed derivation for role shuffles.
//!
//! With a configured base seed every room still gets its own shuffle, and the
//! same room re-started later gets a fresh one.

/// Derive the shuffle seed for a room's game start.
///
/// # Arguments
///
/// * `base_seed` - Configured seed (`MAFIA_RNG_SEED`)
/// * `room_id` - Room being started
/// * `room_version` - Store version at start time, distinguishing restarts
pub fn derive_assignment_seed(base_seed: u64, room_id: u64, room_version: u64) -> u64 {
    // Different multipliers keep room and version contributions apart
    base_seed
        .wrapping_add(room_id.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(room_version.wrapping_mul(1_000_003))
}

/// Fresh entropy for unseeded deployments.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}
