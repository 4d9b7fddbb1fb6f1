use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroArchetype {
    Warrior,
    Mage,
    Archer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackCategory {
    Physical,
    Magical,
    Ranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl HeroArchetype {
    pub const ALL: [HeroArchetype; 3] = [Self::Warrior, Self::Mage, Self::Archer];

    /// Starting stats for a fresh hero of this archetype.
    pub fn base_stats(self) -> StatBlock {
        match self {
            Self::Warrior => StatBlock { health: 120, attack: 15, defense: 10, speed: 5 },
            Self::Mage => StatBlock { health: 80, attack: 25, defense: 5, speed: 8 },
            Self::Archer => StatBlock { health: 100, attack: 18, defense: 7, speed: 10 },
        }
    }

    pub fn attack_category(self) -> AttackCategory {
        match self {
            Self::Warrior => AttackCategory::Physical,
            Self::Mage => AttackCategory::Magical,
            Self::Archer => AttackCategory::Ranged,
        }
    }
}

impl FromStr for HeroArchetype {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "archer" => Ok(Self::Archer),
            _ => Err(EngineError::InvalidArchetype(s.to_string())),
        }
    }
}

impl fmt::Display for HeroArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Archer => "Archer",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Physical => "Physical",
            Self::Magical => "Magical",
            Self::Ranged => "Ranged",
        };
        f.write_str(name)
    }
}

/// A combatant. Only the damage resolver changes health and `alive` after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    id: u32,
    name: String,
    archetype: HeroArchetype,
    attack_category: AttackCategory,
    stats: StatBlock,
    alive: bool,
}

impl Hero {
    pub(crate) fn new(id: u32, name: impl Into<String>, archetype: HeroArchetype) -> Self {
        Self {
            id,
            name: name.into(),
            archetype,
            attack_category: archetype.attack_category(),
            stats: archetype.base_stats(),
            alive: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> HeroArchetype {
        self.archetype
    }

    pub fn attack_category(&self) -> AttackCategory {
        self.attack_category
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Subtract `amount` from health, clamping at 0. Returns the remaining health.
    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        self.stats.health -= amount;
        if self.stats.health <= 0 {
            self.stats.health = 0;
            self.alive = false;
        }
        self.stats.health
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}/{}] hp={} atk={} def={} spd={} {}",
            self.id,
            self.name,
            self.archetype,
            self.attack_category,
            self.stats.health,
            self.stats.attack,
            self.stats.defense,
            self.stats.speed,
            if self.alive { "alive" } else { "defeated" }
        )
    }
}
