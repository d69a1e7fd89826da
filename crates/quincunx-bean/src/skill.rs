//! Skill-level sampling.
//!
//! A bean's skill level is the number of "go right" decisions it makes
//! before defaulting to "go left". Levels follow a binomial-shaped normal
//! distribution: mean `n * p` and standard deviation `sqrt(n * p * (1 - p))`
//! with `p = 0.5`, where `n` is the slot count.
//!
//! Samples are deliberately not clamped to `[0, n - 1]`. A bean whose
//! level exceeds the number of pegs goes right every time, and one with
//! a negative level always goes left.

use quincunx_core::RandomSource;

/// Probability of a "right" decision used to shape the distribution.
const RIGHT_PROBABILITY: f64 = 0.5;

/// Normal distribution of skill levels for a board size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillDistribution {
    mean: f64,
    std_dev: f64,
}

impl SkillDistribution {
    /// Distribution for a board with `slot_count` slots.
    pub fn for_slots(slot_count: usize) -> Self {
        let n = slot_count as f64;
        Self {
            mean: n * RIGHT_PROBABILITY,
            std_dev: (n * RIGHT_PROBABILITY * (1.0 - RIGHT_PROBABILITY)).sqrt(),
        }
    }

    /// Mean skill level.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the skill level.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Draw one skill level, rounded to the nearest integer (halves up).
    pub fn sample<S: RandomSource + ?Sized>(&self, source: &mut S) -> i64 {
        let x = source.standard_normal() * self.std_dev + self.mean;
        (x + 0.5).floor() as i64
    }
}
