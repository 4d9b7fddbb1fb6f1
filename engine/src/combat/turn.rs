use serde::Serialize;

use crate::hero::Hero;

/// Which argument of a two-hero call a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Strictly faster hero attacks; a tie goes to `first`.
pub fn select_attacker(first: &Hero, second: &Hero) -> Side {
    if second.stats().speed > first.stats().speed {
        Side::Second
    } else {
        Side::First
    }
}
