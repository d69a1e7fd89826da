//! Read-only view of board state.
//!
//! A [`BoardSnapshot`] is an owned copy of everything a presentation
//! layer needs: the column of each in-flight bean per row, the bean
//! count of each slot, and the backlog size. It carries no beans, so it
//! can outlive the board it was taken from.

use crate::error::BoardError;
use crate::id::TickId;

/// Owned copy of board occupancy at one tick.
///
/// `in_flight` and `slot_counts` always have the same length, equal to
/// the board's slot count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Tick at which the snapshot was taken.
    pub tick: TickId,
    /// Column of the bean occupying each row, or `None` if the row is empty.
    pub in_flight: Vec<Option<usize>>,
    /// Number of beans resting in each slot.
    pub slot_counts: Vec<usize>,
    /// Beans loaded but not yet admitted to the lattice.
    pub backlog: usize,
}

impl BoardSnapshot {
    /// Number of rows (equal to the number of slots).
    pub fn slot_count(&self) -> usize {
        self.slot_counts.len()
    }

    /// Column of the in-flight bean at `row`, `None` if the row is empty.
    pub fn in_flight_column(&self, row: usize) -> Result<Option<usize>, BoardError> {
        let row = BoardError::check_row(row, self.in_flight.len())?;
        Ok(self.in_flight[row])
    }

    /// Number of beans resting in `slot`.
    pub fn slot_bean_count(&self, slot: usize) -> Result<usize, BoardError> {
        let slot = BoardError::check_row(slot, self.slot_counts.len())?;
        Ok(self.slot_counts[slot])
    }

    /// Number of occupied rows.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.iter().filter(|c| c.is_some()).count()
    }

    /// Total beans resting in slots.
    pub fn slotted_count(&self) -> usize {
        self.slot_counts.iter().sum()
    }

    /// Backlog, in-flight, and slotted beans combined.
    pub fn total_beans(&self) -> usize {
        self.backlog + self.in_flight_count() + self.slotted_count()
    }
}
