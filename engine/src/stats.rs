use serde::Serialize;

use crate::combat::damage::AttackOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BattleStats {
    pub total_damage: i64,
    pub critical_hits: u32,
    pub attacks: u32,
}

impl BattleStats {
    pub fn record(&mut self, outcome: &AttackOutcome) {
        self.attacks += 1;
        self.total_damage += outcome.damage as i64;
        if outcome.is_critical {
            self.critical_hits += 1;
        }
    }

    /// Share of recorded attacks that were critical; 0 when nothing was recorded.
    pub fn crit_rate(&self) -> f64 {
        if self.attacks == 0 {
            0.0
        } else {
            self.critical_hits as f64 / self.attacks as f64
        }
    }
}
