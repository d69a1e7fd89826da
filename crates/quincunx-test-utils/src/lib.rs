//! Test utilities and fixtures for Quincunx development.
//!
//! Provides a scripted [`RandomSource`] for walking exact bean paths,
//! bean fixtures with known skill levels, invariant checks over a
//! [`BoardSnapshot`], and enumeration of the small machine
//! configurations the model-checking tests sweep.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cases;
pub mod invariants;

use std::collections::VecDeque;

use quincunx_bean::Bean;
use quincunx_core::{DecisionMode, RandomSource};

pub use cases::{bit_paths, small_cases, MachineCase};
pub use invariants::{assert_columns_legal, assert_conserved, assert_finished};

/// A [`RandomSource`] that plays back scripted values.
///
/// Bits are consumed in order; once exhausted, every further bit is
/// `false` ("go left"). Normal samples likewise fall back to `0.0`, which
/// places a sampled skill level exactly on the distribution mean.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    bits: VecDeque<bool>,
    normals: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the coin flips, in order.
    pub fn with_bits(mut self, bits: impl IntoIterator<Item = bool>) -> Self {
        self.bits.extend(bits);
        self
    }

    /// Script the standard-normal samples, in order.
    pub fn with_normals(mut self, normals: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(normals);
        self
    }

    /// Bits not yet consumed.
    pub fn remaining_bits(&self) -> usize {
        self.bits.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_bit(&mut self) -> bool {
        self.bits.pop_front().unwrap_or(false)
    }

    fn standard_normal(&mut self) -> f64 {
        self.normals.pop_front().unwrap_or(0.0)
    }
}

/// A skill-mode bean with a fixed level.
pub fn skill_bean(skill_level: i64) -> Bean<ScriptedSource> {
    Bean::with_skill_level(DecisionMode::Skill, skill_level, ScriptedSource::new())
}

/// Skill-mode beans with the given levels, in order.
pub fn skill_beans(levels: &[i64]) -> Vec<Bean<ScriptedSource>> {
    levels.iter().copied().map(skill_bean).collect()
}

/// A luck-mode bean that flips exactly `bits`, then always goes left.
pub fn luck_bean(bits: &[bool]) -> Bean<ScriptedSource> {
    let source = ScriptedSource::new().with_bits(bits.iter().copied());
    Bean::with_skill_level(DecisionMode::Luck, 0, source)
}
