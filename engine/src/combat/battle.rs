use std::fmt;

use tracing::info;

use crate::combat::damage::{resolve_attack, AttackOutcome};
use crate::combat::turn::{select_attacker, Side};
use crate::dice::RandomSource;
use crate::hero::Hero;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundReport {
    /// At least one hero was already down; nothing happened.
    AlreadyDefeated,
    Attack {
        attacker_side: Side,
        attacker: String,
        defender: String,
        outcome: AttackOutcome,
        defeated: bool,
    },
}

impl RoundReport {
    pub fn outcome(&self) -> Option<&AttackOutcome> {
        match self {
            RoundReport::AlreadyDefeated => None,
            RoundReport::Attack { outcome, .. } => Some(outcome),
        }
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundReport::AlreadyDefeated => f.write_str("One of the heroes is already defeated."),
            RoundReport::Attack { attacker, defender, outcome, defeated, .. } => {
                write!(
                    f,
                    "{} attacks {} and deals {} damage{}. {}'s health is now {}.",
                    attacker,
                    defender,
                    outcome.damage,
                    if outcome.is_critical { " (Critical Hit!)" } else { "" },
                    defender,
                    outcome.remaining_health
                )?;
                if *defeated {
                    write!(f, " {} is defeated!", defender)?;
                }
                Ok(())
            }
        }
    }
}

/// One round: the faster hero strikes the other once.
pub fn battle_round(
    first: &mut Hero,
    second: &mut Hero,
    rng: &mut impl RandomSource,
) -> RoundReport {
    if !first.is_alive() || !second.is_alive() {
        return RoundReport::AlreadyDefeated;
    }

    let attacker_side = select_attacker(first, second);
    let (attacker, defender) = match attacker_side {
        Side::First => (&*first, second),
        Side::Second => (&*second, first),
    };

    let outcome = resolve_attack(attacker, defender, rng);
    RoundReport::Attack {
        attacker_side,
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        outcome,
        defeated: !defender.is_alive(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub winner: Side,
    pub winner_name: String,
    pub loser_name: String,
    pub rounds: Vec<RoundReport>,
    /// Round lines followed by the closing verdict.
    pub log: Vec<String>,
}

impl BattleReport {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &AttackOutcome> {
        self.rounds.iter().filter_map(RoundReport::outcome)
    }

    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

fn by_side<'a>(side: Side, first: &'a Hero, second: &'a Hero) -> &'a Hero {
    match side {
        Side::First => first,
        Side::Second => second,
    }
}

/// Fight until one hero falls. A hero that is already down at entry loses without any rounds.
pub fn full_battle(
    first: &mut Hero,
    second: &mut Hero,
    rng: &mut impl RandomSource,
) -> BattleReport {
    let mut rounds = Vec::new();
    let mut log = Vec::new();
    while first.is_alive() && second.is_alive() {
        let round = battle_round(first, second, rng);
        log.push(round.to_string());
        rounds.push(round);
    }

    let winner = if first.is_alive() { Side::First } else { Side::Second };
    let winner_hero = by_side(winner, first, second);
    let loser_hero = by_side(winner.other(), first, second);
    log.push(format!(
        "{} was defeated! Winner: {}",
        loser_hero.name(),
        winner_hero.name()
    ));
    info!(
        winner = winner_hero.name(),
        loser = loser_hero.name(),
        rounds = rounds.len(),
        "battle finished"
    );

    BattleReport {
        winner,
        winner_name: winner_hero.name().to_string(),
        loser_name: loser_hero.name().to_string(),
        rounds,
        log,
    }
}
