//! Shared combat math functions.
//!
//! These pure functions calculate combat outcomes without side effects.
//! Both the encounter orchestrator and the player/monster types use these
//! for consistent combat math.

use rand::Rng;

use crate::core::constants::{DAMAGE_ROLL_MAX, DAMAGE_ROLL_MIN};

/// Roll attack damage for a combatant.
///
/// Returns `base_damage` scaled by a uniform multiplier in `[0.8, 1.2)`,
/// freshly sampled on every call.
pub fn attack_roll(base_damage: f64, rng: &mut impl Rng) -> f64 {
    base_damage * rng.gen_range(DAMAGE_ROLL_MIN..DAMAGE_ROLL_MAX)
}

/// Apply damage to health, returning the remaining health.
///
/// Exactly subtractive: no clamping, so health may go negative. Liveness is
/// decided by [`is_alive`], not by the stored value.
pub fn apply_damage(health: f64, amount: f64) -> f64 {
    health - amount
}

/// Check if an entity with the given health is still alive.
/// Strict inequality: exactly zero counts as dead.
pub fn is_alive(health: f64) -> bool {
    health > 0.0
}
