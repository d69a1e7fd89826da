//! A single falling bean.

use quincunx_core::{BoardError, DecisionMode, RandomSource};
use rand_chacha::ChaCha8Rng;

use crate::skill::SkillDistribution;

/// A bean with a fixed decision policy and per-descent position state.
///
/// The policy (`mode`, `skill_level`) never changes after construction.
/// The descent state (`direction`, `remaining_right_bias`) is reinitialised
/// by [`reset_for_descent`](Bean::reset_for_descent) every time the board
/// admits the bean at row 0, so the same bean can be replayed through
/// repeated experiments.
///
/// `direction` counts the "right" decisions made so far. It doubles as
/// the bean's column within its current row and, once the bean reaches
/// the last row, as the index of the slot it falls into.
///
/// # Examples
///
/// ```
/// use quincunx_bean::Bean;
/// use quincunx_core::DecisionMode;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut bean = Bean::with_skill_level(DecisionMode::Skill, 2, ChaCha8Rng::seed_from_u64(0));
/// bean.reset_for_descent();
/// for _ in 0..3 {
///     bean.decide_direction();
/// }
/// assert_eq!(bean.direction(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Bean<S = ChaCha8Rng> {
    mode: DecisionMode,
    skill_level: i64,
    remaining_right_bias: i64,
    direction: usize,
    source: S,
}

impl<S: RandomSource> Bean<S> {
    /// Create a bean for a board with `slot_count` slots.
    ///
    /// The skill level is drawn once from `source` using
    /// [`SkillDistribution::for_slots`], whatever the mode; the source is
    /// then kept for luck-mode decisions.
    ///
    /// Returns `Err(BoardError::InvalidSlotCount)` if `slot_count == 0`.
    pub fn new(slot_count: usize, mode: DecisionMode, source: S) -> Result<Self, BoardError> {
        if slot_count == 0 {
            return Err(BoardError::InvalidSlotCount { value: slot_count });
        }
        Ok(Self::from_distribution(
            &SkillDistribution::for_slots(slot_count),
            mode,
            source,
        ))
    }

    /// Create a bean whose skill level is drawn from `distribution`.
    pub(crate) fn from_distribution(
        distribution: &SkillDistribution,
        mode: DecisionMode,
        mut source: S,
    ) -> Self {
        let skill_level = distribution.sample(&mut source);
        Self::with_skill_level(mode, skill_level, source)
    }

    /// Create a bean with a known skill level.
    pub fn with_skill_level(mode: DecisionMode, skill_level: i64, source: S) -> Self {
        Self {
            mode,
            skill_level,
            remaining_right_bias: skill_level,
            direction: 0,
            source,
        }
    }

    /// Make the decision for one peg, moving right by at most one column.
    pub fn decide_direction(&mut self) {
        match self.mode {
            DecisionMode::Luck => {
                if self.source.next_bit() {
                    self.direction += 1;
                }
            }
            DecisionMode::Skill => {
                if self.remaining_right_bias > 0 {
                    self.direction += 1;
                    self.remaining_right_bias -= 1;
                }
            }
        }
    }

    /// Return to column 0 with a full right-bias budget.
    ///
    /// Must be called before the first [`decide_direction`](Bean::decide_direction)
    /// of every descent.
    pub fn reset_for_descent(&mut self) {
        self.direction = 0;
        self.remaining_right_bias = self.skill_level;
    }
}

impl<S> Bean<S> {
    /// Decision policy.
    pub fn mode(&self) -> DecisionMode {
        self.mode
    }

    /// `true` if the bean decides by coin flip.
    pub fn is_luck(&self) -> bool {
        self.mode.is_luck()
    }

    /// Number of initial "right" decisions in skill mode. May be negative
    /// or larger than the number of pegs.
    pub fn skill_level(&self) -> i64 {
        self.skill_level
    }

    /// "Right" decisions still owed in the current descent (skill mode).
    pub fn remaining_right_bias(&self) -> i64 {
        self.remaining_right_bias
    }

    /// Current column, or slot index once the bean reaches the last row.
    pub fn direction(&self) -> usize {
        self.direction
    }
}
