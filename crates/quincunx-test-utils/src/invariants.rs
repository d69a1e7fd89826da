//! Assertions over board snapshots.
//!
//! These encode the machine invariants every test sweep checks after
//! each tick: no bean is created or lost, and every in-flight bean sits
//! on a legal lattice position.

use quincunx_core::BoardSnapshot;

/// Backlog + in-flight + slotted beans equals `expected`.
pub fn assert_conserved(snapshot: &BoardSnapshot, expected: usize, context: &str) {
    assert_eq!(
        snapshot.total_beans(),
        expected,
        "{context}: bean count not conserved at tick {} (backlog {}, in flight {}, slotted {})",
        snapshot.tick,
        snapshot.backlog,
        snapshot.in_flight_count(),
        snapshot.slotted_count(),
    );
}

/// Every occupied row `y` holds a bean at a column in `[0, y]`.
pub fn assert_columns_legal(snapshot: &BoardSnapshot, context: &str) {
    for (row, column) in snapshot.in_flight.iter().enumerate() {
        if let Some(column) = *column {
            assert!(
                column <= row,
                "{context}: bean at column {column} on row {row} at tick {}",
                snapshot.tick,
            );
        }
    }
}

/// Nothing waiting, nothing falling, and `expected` beans in the slots.
pub fn assert_finished(snapshot: &BoardSnapshot, expected: usize, context: &str) {
    assert_eq!(snapshot.backlog, 0, "{context}: backlog not drained");
    assert_eq!(snapshot.in_flight_count(), 0, "{context}: beans still falling");
    assert_eq!(
        snapshot.slotted_count(),
        expected,
        "{context}: wrong slotted total"
    );
}
