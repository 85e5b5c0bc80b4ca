//! Role assignment: builds the weighted role pool and distributes it across
//! the seating at game start.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::catalog::{find_role, RoleDefinition};
use super::game_types::PlayerId;
use super::state::PlayerAssignment;

/// Build the unshuffled role pool.
///
/// Each role contributes `max(1, max_count)` copies in catalog order; the pool
/// is then padded with `filler` until it covers every seated player.
pub fn build_role_pool(roles: &[RoleDefinition], player_count: usize, filler: &str) -> Vec<String> {
    let mut pool: Vec<String> = roles
        .iter()
        .flat_map(|role| std::iter::repeat(role.name.clone()).take(role.pool_copies()))
        .collect();
    while pool.len() < player_count {
        pool.push(filler.to_string());
    }
    pool
}

/// Shuffle a pool in place with an unbiased Fisher-Yates pass.
pub fn shuffle_pool<R: Rng + ?Sized>(pool: &mut [String], rng: &mut R) {
    pool.shuffle(rng);
}

/// Deterministic shuffle source for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Assign roles to `players` (seating order) from `roles`.
///
/// Player `i` receives `pool[i % pool.len()]` after shuffling. Every player
/// starts alive with no used abilities; abilities and team are copied from
/// the matching role definition, or left empty when the role name (usually
/// the filler) has no catalog entry.
///
/// Never rejects on player count; minimum seating is the caller's rule.
pub fn assign_roles<R: Rng + ?Sized>(
    players: &[PlayerId],
    roles: &[RoleDefinition],
    filler: &str,
    rng: &mut R,
) -> BTreeMap<PlayerId, PlayerAssignment> {
    let mut pool = build_role_pool(roles, players.len(), filler);
    shuffle_pool(&mut pool, rng);

    let mut assignments = BTreeMap::new();
    if pool.is_empty() {
        // only reachable with no players and no roles
        return assignments;
    }
    for (idx, player) in players.iter().enumerate() {
        let role_name = &pool[idx % pool.len()];
        let assignment = match find_role(roles, role_name) {
            Some(def) => PlayerAssignment::new(&def.name, def.team.clone(), def.abilities.clone()),
            None => PlayerAssignment::new(role_name, None, Vec::new()),
        };
        assignments.insert(*player, assignment);
    }
    assignments
}
