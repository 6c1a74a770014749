//! Number source used to sample colors
//!
//! Without a seed, values come from an entropy seeded [`Pcg`] shifted by the
//! golden ratio conjugate. With a seed, a small linear congruential generator
//! is used so that the same seed gives the same colors everywhere.

use rand::{Rng, SeedableRng};

use crate::Pcg;

pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

const LCG_MULTIPLIER: i128 = 9301;
const LCG_INCREMENT: i128 = 49297;
const LCG_MODULUS: i128 = 233280;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomSource {
    seed: Option<i64>,
    rng: Pcg,
}

impl RandomSource {
    pub fn new(seed: Option<i64>) -> Self {
        Self {
            seed,
            rng: Pcg::from_entropy(),
        }
    }

    /// Current LCG state, `None` when unseeded
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<i64>) {
        self.seed = seed;
    }

    /// Integer valued sample from `[low, high]`
    ///
    /// Seeded draws never reach `high` (the span is `high - low`), unseeded
    /// draws can. A seeded upper bound of 0 is read as 1.
    pub fn within(&mut self, low: f64, high: f64) -> f64 {
        match self.seed {
            None => {
                let r = (self.rng.gen::<f64>() + GOLDEN_RATIO_CONJUGATE) % 1.0;
                (low + r * (high + 1.0 - low)).floor()
            }
            Some(seed) => {
                let next = (i128::from(seed) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
                // |next| < LCG_MODULUS, always fits
                let next = next as i64;
                self.seed = Some(next);
                let r = next as f64 / LCG_MODULUS as f64;
                let high = if high == 0.0 || high.is_nan() { 1.0 } else { high };
                let low = if low.is_nan() { 0.0 } else { low };
                (low + r * (high - low)).floor()
            }
        }
    }

    /// Uniform value in `[0, 1)` that never touches the LCG state
    pub fn unit(&mut self) -> f64 {
        self.rng.gen()
    }
}
