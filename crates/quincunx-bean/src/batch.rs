//! Reproducible bean sets.
//!
//! [`BeanBatch`] turns one `u64` seed into any number of beans. A master
//! `ChaCha8Rng` is seeded from the batch seed and each bean receives its
//! own `ChaCha8Rng` forked from the master, which it uses first for its
//! skill draw and then for luck-mode coin flips. Two batches with the
//! same slot count, mode, and seed produce identical beans.

use quincunx_core::{BoardError, DecisionMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bean::Bean;
use crate::skill::SkillDistribution;

/// Recipe for a seeded set of beans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeanBatch {
    slot_count: usize,
    mode: DecisionMode,
    seed: u64,
}

impl BeanBatch {
    /// Create a recipe for beans on a `slot_count`-slot board.
    ///
    /// Returns `Err(BoardError::InvalidSlotCount)` if `slot_count == 0`.
    pub fn new(slot_count: usize, mode: DecisionMode, seed: u64) -> Result<Self, BoardError> {
        if slot_count == 0 {
            return Err(BoardError::InvalidSlotCount { value: slot_count });
        }
        Ok(Self {
            slot_count,
            mode,
            seed,
        })
    }

    /// Slot count the beans are sized for.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Decision mode given to every bean.
    pub fn mode(&self) -> DecisionMode {
        self.mode
    }

    /// Master seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build `count` beans, in order.
    pub fn build(&self, count: usize) -> Vec<Bean<ChaCha8Rng>> {
        let distribution = SkillDistribution::for_slots(self.slot_count);
        let mut master = ChaCha8Rng::seed_from_u64(self.seed);
        let beans: Vec<_> = (0..count)
            .map(|_| {
                let source = ChaCha8Rng::from_rng(&mut master);
                Bean::from_distribution(&distribution, self.mode, source)
            })
            .collect();
        tracing::debug!(
            count = beans.len(),
            slot_count = self.slot_count,
            mode = %self.mode,
            seed = self.seed,
            "built bean batch"
        );
        beans
    }
}
