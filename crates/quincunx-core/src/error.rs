//! Error types shared across the Quincunx workspace.
//!
//! The board has a narrow failure surface: construction with zero slots,
//! and queries addressing a row or slot that does not exist. Everything
//! else is an in-memory operation that always succeeds.

use std::error::Error;
use std::fmt;

/// Errors from board and bean construction or board queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A board or bean was requested with an unusable slot count.
    InvalidSlotCount {
        /// The rejected slot count.
        value: usize,
    },
    /// A row or slot index outside `[0, slot_count)` was queried.
    RowOutOfRange {
        /// The offending index.
        row: usize,
        /// Number of rows (and slots) on the board.
        slot_count: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlotCount { value } => {
                write!(f, "slot count must be at least 1, got {value}")
            }
            Self::RowOutOfRange { row, slot_count } => {
                write!(f, "row {row} out of range [0, {slot_count})")
            }
        }
    }
}

impl Error for BoardError {}

impl BoardError {
    /// Check `row` against `slot_count`, returning it unchanged if valid.
    pub fn check_row(row: usize, slot_count: usize) -> Result<usize, BoardError> {
        if row < slot_count {
            Ok(row)
        } else {
            Err(Self::RowOutOfRange { row, slot_count })
        }
    }
}
