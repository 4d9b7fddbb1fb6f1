//! Hero creation and the arena context that owns ids and running statistics.

use tracing::debug;

use crate::combat::battle::{full_battle, BattleReport};
use crate::combat::damage::{resolve_attack, AttackOutcome};
use crate::dice::RandomSource;
use crate::error::EngineError;
use crate::hero::{Hero, HeroArchetype};
use crate::stats::BattleStats;

/// Owns the hero-id counter and the damage / critical-hit tallies.
/// Separate arenas never share either.
#[derive(Debug, Clone)]
pub struct Arena {
    next_id: u32,
    stats: BattleStats,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Self { next_id: 1, stats: BattleStats::default() }
    }

    pub fn create_hero(&mut self, name: impl Into<String>, archetype: HeroArchetype) -> Hero {
        let id = self.next_id;
        self.next_id += 1;
        let hero = Hero::new(id, name, archetype);
        debug!(id, name = hero.name(), %archetype, "hero created");
        hero
    }

    /// Like [`Arena::create_hero`] with the archetype given as text.
    /// An unknown archetype does not consume an id.
    pub fn create_hero_from_str(
        &mut self,
        name: impl Into<String>,
        archetype: &str,
    ) -> Result<Hero, EngineError> {
        let archetype: HeroArchetype = archetype.parse()?;
        Ok(self.create_hero(name, archetype))
    }

    /// The id the next created hero will receive.
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    pub fn stats(&self) -> &BattleStats {
        &self.stats
    }

    /// Resolve one attack and add it to the running statistics.
    pub fn tracked_attack(
        &mut self,
        attacker: &Hero,
        defender: &mut Hero,
        rng: &mut impl RandomSource,
    ) -> AttackOutcome {
        let outcome = resolve_attack(attacker, defender, rng);
        self.stats.record(&outcome);
        outcome
    }

    /// Run a full battle, recording every attack it resolves.
    pub fn tracked_battle(
        &mut self,
        first: &mut Hero,
        second: &mut Hero,
        rng: &mut impl RandomSource,
    ) -> BattleReport {
        let report = full_battle(first, second, rng);
        for outcome in report.outcomes() {
            self.stats.record(outcome);
        }
        report
    }
}

/// Borrow two distinct heroes of a roster mutably.
/// Returns `None` when the indices are equal or out of range.
pub fn heroes_pair_mut(
    heroes: &mut [Hero],
    first: usize,
    second: usize,
) -> Option<(&mut Hero, &mut Hero)> {
    if first == second || first >= heroes.len() || second >= heroes.len() {
        return None;
    }
    if first < second {
        let (lo, hi) = heroes.split_at_mut(second);
        Some((&mut lo[first], &mut hi[0]))
    } else {
        let (lo, hi) = heroes.split_at_mut(first);
        Some((&mut hi[0], &mut lo[second]))
    }
}
