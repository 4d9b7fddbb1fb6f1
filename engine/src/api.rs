use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::combat::turn::Side;
use crate::dice::Dice;
use crate::error::EngineError;
use crate::hero::HeroArchetype;
use crate::roster::Arena;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DuelConfig {
    pub first: HeroArchetype,
    pub second: HeroArchetype,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DuelResult {
    pub winner: Side,
    pub winner_archetype: HeroArchetype,
    pub rounds: u32,
    pub first_hp_end: i32,
    pub second_hp_end: i32,
    pub critical_hits: u32,
    pub total_damage: i64,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DuelSummary {
    pub samples: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub avg_rounds: f64,
    pub crit_rate: f64,
}

/// One seeded battle between fresh heroes named after their archetypes.
pub fn simulate_duel(cfg: &DuelConfig) -> DuelResult {
    let mut arena = Arena::new();
    let mut first = arena.create_hero(cfg.first.to_string(), cfg.first);
    let mut second = arena.create_hero(cfg.second.to_string(), cfg.second);
    let mut dice = Dice::from_seed(cfg.seed);

    let report = arena.tracked_battle(&mut first, &mut second, &mut dice);
    let stats = arena.stats();

    DuelResult {
        winner: report.winner,
        winner_archetype: match report.winner {
            Side::First => cfg.first,
            Side::Second => cfg.second,
        },
        rounds: report.round_count() as u32,
        first_hp_end: first.health(),
        second_hp_end: second.health(),
        critical_hits: stats.critical_hits,
        total_damage: stats.total_damage,
        log: report.log,
    }
}

/// Repeat [`simulate_duel`] `samples` times; sample `i` uses `seed + i`.
pub fn simulate_duel_many(cfg: &DuelConfig, samples: u32) -> Result<DuelSummary> {
    if samples == 0 {
        return Err(EngineError::NoSamples.into());
    }

    let mut first_wins = 0u32;
    let mut second_wins = 0u32;
    let mut rounds_total = 0u64;
    let mut crits = 0u64;
    let mut attacks = 0u64;

    for i in 0..samples {
        let sample = DuelConfig { seed: cfg.seed.wrapping_add(i as u64), ..cfg.clone() };
        let res = simulate_duel(&sample);
        match res.winner {
            Side::First => first_wins += 1,
            Side::Second => second_wins += 1,
        }
        rounds_total += res.rounds as u64;
        crits += res.critical_hits as u64;
        // every round of a fresh duel is exactly one attack
        attacks += res.rounds as u64;
    }

    Ok(DuelSummary {
        samples,
        first_wins,
        second_wins,
        avg_rounds: rounds_total as f64 / samples as f64,
        crit_rate: if attacks == 0 { 0.0 } else { crits as f64 / attacks as f64 },
    })
}
