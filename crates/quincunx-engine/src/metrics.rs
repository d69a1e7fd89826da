//! Per-run results of an experiment.
//!
//! [`RunMetrics`] summarises one run of the machine: how long it took in
//! ticks and where the beans ended up. Ticks are logical steps; the
//! engine never measures wall-clock time.

/// Outcome of a single run, recorded after any configured trim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Zero-based index of the run within the experiment.
    pub run: usize,
    /// Productive ticks until the machine finished.
    pub ticks: u64,
    /// Beans resting in slots.
    pub beans_slotted: usize,
    /// Beans removed by the end-of-run trim.
    pub beans_trimmed: usize,
    /// Weighted mean slot index of the slotted beans.
    pub average_slot_index: f64,
    /// Bean count of each slot.
    pub slot_counts: Vec<usize>,
}
