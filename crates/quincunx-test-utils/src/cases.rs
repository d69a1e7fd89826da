//! Enumeration of small machine configurations.
//!
//! The model-checking sweeps cover every combination of 1–5 slots,
//! 0–3 beans, and both decision modes, and walk every possible sequence
//! of coin flips for luck-mode beans on the smallest boards.

use quincunx_core::DecisionMode;

/// One machine configuration under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MachineCase {
    pub slot_count: usize,
    pub bean_count: usize,
    pub mode: DecisionMode,
}

impl MachineCase {
    /// Label used in assertion messages.
    pub fn label(&self) -> String {
        format!(
            "(slot_count={}, bean_count={}, mode={})",
            self.slot_count, self.bean_count, self.mode
        )
    }
}

/// Every combination of 1–5 slots, 0–3 beans, and both modes.
pub fn small_cases() -> Vec<MachineCase> {
    let mut cases = Vec::new();
    for slot_count in 1..=5 {
        for bean_count in 0..=3 {
            for mode in [DecisionMode::Luck, DecisionMode::Skill] {
                cases.push(MachineCase {
                    slot_count,
                    bean_count,
                    mode,
                });
            }
        }
    }
    cases
}

/// All `2^len` bit sequences of length `len`, in binary counting order.
///
/// Bit `i` of the sequence is bit `i` (least significant first) of the
/// counter.
pub fn bit_paths(len: usize) -> impl Iterator<Item = Vec<bool>> {
    assert!(len < 32, "bit_paths({len}) would enumerate too many paths");
    (0u32..(1 << len)).map(move |n| (0..len).map(|i| (n >> i) & 1 == 1).collect())
}
