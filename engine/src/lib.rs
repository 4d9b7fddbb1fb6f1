pub mod api;
pub mod combat;
pub mod dice;
pub mod error;
pub mod hero;
pub mod query;
pub mod roster;
pub mod stats;

pub use combat::battle::{battle_round, full_battle, BattleReport, RoundReport};
pub use combat::damage::{
    compute_damage, resolve_attack, AttackOutcome, CRIT_CHANCE, CRIT_MULTIPLIER, MIN_DAMAGE,
};
pub use combat::turn::{select_attacker, Side};
pub use dice::{Dice, RandomSource};
pub use error::EngineError;
pub use hero::{AttackCategory, Hero, HeroArchetype, StatBlock};
pub use roster::{heroes_pair_mut, Arena};
pub use stats::BattleStats;
