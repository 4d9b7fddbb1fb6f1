use serde::Serialize;
use tracing::debug;

use crate::dice::RandomSource;
use crate::hero::Hero;

pub const CRIT_CHANCE: f64 = 0.2;
pub const CRIT_MULTIPLIER: i32 = 2;
pub const MIN_DAMAGE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    pub damage: i32,
    pub is_critical: bool,
    pub remaining_health: i32,
}

/// Attack minus defense, floored at [`MIN_DAMAGE`], doubled on a critical hit.
pub fn compute_damage(attack: i32, defense: i32, is_critical: bool) -> i32 {
    let adjusted = (attack - defense).max(MIN_DAMAGE);
    if is_critical { adjusted * CRIT_MULTIPLIER } else { adjusted }
}

/// Resolve one attack, mutating the defender's health and alive flag.
///
/// Both heroes must be alive; callers check before attacking.
pub fn resolve_attack(
    attacker: &Hero,
    defender: &mut Hero,
    rng: &mut impl RandomSource,
) -> AttackOutcome {
    debug_assert!(attacker.is_alive(), "defeated hero {} cannot attack", attacker.name());
    debug_assert!(defender.is_alive(), "defeated hero {} cannot be attacked", defender.name());

    let is_critical = rng.next_unit() < CRIT_CHANCE;
    let damage = compute_damage(attacker.stats().attack, defender.stats().defense, is_critical);

    let remaining_health = defender.take_damage(damage);
    debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        damage,
        critical = is_critical,
        remaining = remaining_health,
        "attack resolved"
    );

    AttackOutcome { damage, is_critical, remaining_health }
}
