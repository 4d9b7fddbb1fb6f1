use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<f64>, next: usize },
}

pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    /// Replays `values` in order, wrapping around. An empty script always yields 0.5.
    pub fn from_scripted(values: Vec<f64>) -> Self {
        Self { source: Source::Scripted { values, next: 0 } }
    }

    /// Never rolls a critical hit.
    pub fn no_crits() -> Self {
        Self::from_scripted(vec![0.99])
    }

    /// Rolls a critical hit every time.
    pub fn always_crits() -> Self {
        Self::from_scripted(vec![0.0])
    }
}

impl RandomSource for Dice {
    fn next_unit(&mut self) -> f64 {
        match &mut self.source {
            Source::Seeded(rng) => rng.r#gen::<f64>(),
            Source::Scripted { values, next } => {
                if values.is_empty() {
                    return 0.5;
                }
                let v = values[*next % values.len()];
                *next += 1;
                // keep scripted draws inside the half-open unit range
                v.clamp(0.0, 1.0 - f64::EPSILON)
            }
        }
    }
}
