//! The Galton board stepping engine.
//!
//! [`Board`] stores in-flight beans by row in a fixed-size array, using
//! a logical coordinate system where a bean at row `y` sits at column
//! `x = direction` with `0 <= x <= y`. For a four-slot machine:
//!
//! ```text
//!                (0,0)
//!            (0,1)   (1,1)
//!        (0,2)   (1,2)   (2,2)
//!    (0,3)   (1,3)   (2,3)   (3,3)
//!   [Slot0] [Slot1] [Slot2] [Slot3]
//! ```
//!
//! # Ownership model
//!
//! Beans are moved into the board by [`reset`](Board::reset) and never
//! handed back; [`repeat`](Board::repeat) scoops them out of the slots and
//! the lattice into the backlog again. All mutating methods take
//! `&mut self`, so a single driver loop is the only possible caller.

use std::collections::VecDeque;

use quincunx_bean::Bean;
use quincunx_core::{BoardError, BoardSnapshot, RandomSource, TickId};
use rand_chacha::ChaCha8Rng;

// ── Half ────────────────────────────────────────────────────────

/// Which half of the slotted beans a trim keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    /// Keep the higher-indexed half; see [`Board::upper_half`].
    Upper,
    /// Keep the lower-indexed half; see [`Board::lower_half`].
    Lower,
}

// ── Board ───────────────────────────────────────────────────────

/// A bean-counter machine with `slot_count` rows of pegs and
/// `slot_count` slots.
///
/// Mass is conserved across every operation except the half trims:
/// `backlog_count() + in_flight_count() + slotted_count() == loaded_count()`.
///
/// # Example
///
/// ```
/// use quincunx_bean::BeanBatch;
/// use quincunx_core::DecisionMode;
/// use quincunx_engine::Board;
///
/// let mut board = Board::new(10).unwrap();
/// let batch = BeanBatch::new(10, DecisionMode::Luck, 42).unwrap();
/// board.reset(batch.build(100));
/// while board.advance_step() {}
/// assert_eq!(board.slotted_count(), 100);
/// ```
#[derive(Debug)]
pub struct Board<S = ChaCha8Rng> {
    slot_count: usize,
    in_flight: Vec<Option<Bean<S>>>,
    backlog: VecDeque<Bean<S>>,
    slots: Vec<VecDeque<Bean<S>>>,
    loaded: usize,
    tick: TickId,
}

impl<S: RandomSource> Board<S> {
    /// Create an empty board with `slot_count` rows and slots.
    ///
    /// Returns `Err(BoardError::InvalidSlotCount)` if `slot_count == 0`.
    pub fn new(slot_count: usize) -> Result<Self, BoardError> {
        if slot_count == 0 {
            return Err(BoardError::InvalidSlotCount { value: slot_count });
        }
        Ok(Self {
            slot_count,
            in_flight: (0..slot_count).map(|_| None).collect(),
            backlog: VecDeque::new(),
            slots: (0..slot_count).map(|_| VecDeque::new()).collect(),
            loaded: 0,
            tick: TickId::default(),
        })
    }

    /// Hard reset: discard all state and load `beans` in order.
    ///
    /// The first bean is admitted to the top of the lattice immediately.
    /// An empty collection leaves the machine empty; this is the normal
    /// "no beans" state, not an error.
    pub fn reset<I>(&mut self, beans: I)
    where
        I: IntoIterator<Item = Bean<S>>,
    {
        self.backlog.clear();
        self.in_flight.iter_mut().for_each(|cell| *cell = None);
        self.slots.iter_mut().for_each(VecDeque::clear);

        self.backlog.extend(beans);
        self.loaded = self.backlog.len();
        self.tick = TickId::default();
        self.admit();

        tracing::debug!(
            slot_count = self.slot_count,
            loaded = self.loaded,
            "board reset"
        );
    }

    /// Empty the machine. Equivalent to resetting with no beans.
    pub fn clear(&mut self) {
        self.reset(std::iter::empty());
    }

    /// Soft reset: scoop every slotted and in-flight bean back into the
    /// backlog and start again with the same beans.
    ///
    /// Rows are drained top to bottom, each slot's beans (oldest first)
    /// before that row's in-flight bean. Bean policies are untouched, so a
    /// skill-mode experiment repeats exactly.
    pub fn repeat(&mut self) {
        for row in 0..self.slot_count {
            self.backlog.extend(self.slots[row].drain(..));
            if let Some(bean) = self.in_flight[row].take() {
                self.backlog.push_back(bean);
            }
        }
        self.tick = TickId::default();
        self.admit();

        tracing::debug!(loaded = self.loaded, "board repeat");
    }

    /// Advance the machine one tick.
    ///
    /// Every in-flight bean falls one row: the bean on the last row drops
    /// into the slot matching its column, and each other bean decides its
    /// direction at the peg it is leaving and moves down. Rows are
    /// processed bottom to top so each row is vacated before the bean
    /// above lands in it, and no bean moves twice. A new bean is then
    /// admitted from the backlog, if any remain.
    ///
    /// Returns `true` if any bean moved or was deposited; `false` means
    /// the run is over (nothing waiting, nothing falling).
    pub fn advance_step(&mut self) -> bool {
        let last = self.slot_count - 1;
        let mut changed = false;

        for row in (0..self.slot_count).rev() {
            // The previous occupant of the row below was moved or
            // deposited earlier in this pass.
            debug_assert!(row == last || self.in_flight[row + 1].is_none());

            let Some(mut bean) = self.in_flight[row].take() else {
                continue;
            };
            if row == last {
                // Column <= row, so the slot index is always in range.
                let slot = bean.direction();
                self.slots[slot].push_back(bean);
            } else {
                bean.decide_direction();
                self.in_flight[row + 1] = Some(bean);
            }
            changed = true;
        }

        self.admit();

        if changed {
            self.tick = self.tick.next();
            tracing::trace!(
                tick = self.tick.0,
                backlog = self.backlog.len(),
                "advanced"
            );
        }
        changed
    }

    /// Move the next backlog bean, if any, to the top of the lattice.
    fn admit(&mut self) {
        debug_assert!(self.in_flight[0].is_none());
        self.in_flight[0] = self.backlog.pop_front().map(|mut bean| {
            bean.reset_for_descent();
            bean
        });
    }
}

impl<S> Board<S> {
    /// Number of rows, which is also the number of slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Column of the in-flight bean at `row`, or `None` if the row is empty.
    ///
    /// Returns `Err(BoardError::RowOutOfRange)` if `row >= slot_count`.
    pub fn in_flight_column(&self, row: usize) -> Result<Option<usize>, BoardError> {
        let row = BoardError::check_row(row, self.slot_count)?;
        Ok(self.in_flight[row].as_ref().map(Bean::direction))
    }

    /// Number of beans resting in `slot`.
    ///
    /// Returns `Err(BoardError::RowOutOfRange)` if `slot >= slot_count`.
    pub fn slot_bean_count(&self, slot: usize) -> Result<usize, BoardError> {
        let slot = BoardError::check_row(slot, self.slot_count)?;
        Ok(self.slots[slot].len())
    }

    /// Beans resting in `slot`, oldest first.
    pub fn slot_beans(&self, slot: usize) -> Result<impl Iterator<Item = &Bean<S>>, BoardError> {
        let slot = BoardError::check_row(slot, self.slot_count)?;
        Ok(self.slots[slot].iter())
    }

    /// Bean counts of every slot, indexed by slot.
    pub fn slot_bean_counts(&self) -> Vec<usize> {
        self.slots.iter().map(VecDeque::len).collect()
    }

    /// Beans loaded but not yet admitted to the lattice.
    pub fn backlog_count(&self) -> usize {
        self.backlog.len()
    }

    /// Number of occupied rows.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.iter().filter(|cell| cell.is_some()).count()
    }

    /// Total beans resting in slots.
    pub fn slotted_count(&self) -> usize {
        self.slots.iter().map(VecDeque::len).sum()
    }

    /// Beans owned by the board: loaded by the last reset, less any
    /// removed by half trims since.
    pub fn loaded_count(&self) -> usize {
        self.loaded
    }

    /// `true` once nothing is waiting or falling.
    pub fn is_finished(&self) -> bool {
        self.backlog.is_empty() && self.in_flight.iter().all(Option::is_none)
    }

    /// Productive ticks since the last reset or repeat.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Mean slot index of all slotted beans, weighted by slot count.
    ///
    /// Returns `0.0` when no beans are slotted.
    pub fn average_slot_index(&self) -> f64 {
        let total = self.slotted_count();
        if total == 0 {
            return 0.0;
        }
        let weighted: usize = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| index * slot.len())
            .sum();
        weighted as f64 / total as f64
    }

    /// Owned copy of the current occupancy, for rendering and checks.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tick: self.tick,
            in_flight: self
                .in_flight
                .iter()
                .map(|cell| cell.as_ref().map(Bean::direction))
                .collect(),
            slot_counts: self.slot_bean_counts(),
            backlog: self.backlog.len(),
        }
    }

    /// Keep the higher-indexed half of the slotted beans.
    ///
    /// Removes `floor(N / 2)` of the `N` slotted beans, draining slot 0
    /// first (oldest bean first), then slot 1, and so on. With an odd `N`
    /// the larger half, `ceil(N / 2)`, is kept. Returns the number removed.
    pub fn upper_half(&mut self) -> usize {
        let n = self.slot_count;
        let removed = self.remove_half(0..n);
        tracing::debug!(removed, kept = self.slotted_count(), "kept upper half");
        removed
    }

    /// Keep the lower-indexed half of the slotted beans.
    ///
    /// Removes `floor(N / 2)` of the `N` slotted beans, draining the
    /// highest slot first (oldest bean first within a slot) and working
    /// down. Returns the number removed.
    pub fn lower_half(&mut self) -> usize {
        let n = self.slot_count;
        let removed = self.remove_half((0..n).rev());
        tracing::debug!(removed, kept = self.slotted_count(), "kept lower half");
        removed
    }

    /// Dispatch to [`upper_half`](Board::upper_half) or
    /// [`lower_half`](Board::lower_half).
    pub fn trim(&mut self, keep: Half) -> usize {
        match keep {
            Half::Upper => self.upper_half(),
            Half::Lower => self.lower_half(),
        }
    }

    /// Remove `floor(N / 2)` slotted beans, visiting slots in `order`.
    fn remove_half(&mut self, order: impl Iterator<Item = usize>) -> usize {
        let quota = self.slotted_count() / 2;
        let mut remaining = quota;
        for slot in order {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(self.slots[slot].len());
            self.slots[slot].drain(..take);
            remaining -= take;
        }
        self.loaded -= quota;
        quota
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quincunx_test_utils::{luck_bean, skill_bean, skill_beans, ScriptedSource};

    type TestBoard = Board<ScriptedSource>;

    fn run_to_end(board: &mut TestBoard) -> u64 {
        let mut ticks = 0;
        while board.advance_step() {
            ticks += 1;
            assert!(ticks < 10_000, "board never finished");
        }
        ticks
    }

    fn columns(board: &TestBoard) -> Vec<Option<usize>> {
        (0..board.slot_count())
            .map(|row| board.in_flight_column(row).unwrap())
            .collect()
    }

    fn slot_levels(board: &TestBoard, slot: usize) -> Vec<i64> {
        board
            .slot_beans(slot)
            .unwrap()
            .map(Bean::skill_level)
            .collect()
    }

    /// Board with the given slot contents; beans are tagged with their
    /// arrival order through the skill level (slot * 100 + position).
    fn board_with_slots(counts: &[usize]) -> TestBoard {
        let mut board = TestBoard::new(counts.len()).unwrap();
        let mut beans = Vec::new();
        for (slot, &count) in counts.iter().enumerate() {
            for i in 0..count {
                beans.push(skill_bean((slot * 100 + i) as i64));
            }
        }
        board.reset(beans);
        // Re-home every bean into the slot its tag names.
        let mut all: Vec<Bean<ScriptedSource>> = board.backlog.drain(..).collect();
        all.extend(board.in_flight[0].take());
        all.sort_by_key(Bean::skill_level);
        for bean in all {
            let slot = (bean.skill_level() / 100) as usize;
            board.slots[slot].push_back(bean);
        }
        board
    }

    // ── Construction and queries ────────────────────────────────

    #[test]
    fn zero_slots_rejected() {
        assert_eq!(
            TestBoard::new(0).unwrap_err(),
            BoardError::InvalidSlotCount { value: 0 }
        );
    }

    #[test]
    fn new_board_is_empty() {
        let board = TestBoard::new(3).unwrap();
        assert_eq!(board.slot_count(), 3);
        assert_eq!(board.backlog_count(), 0);
        assert_eq!(board.in_flight_count(), 0);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 0]);
        assert!(board.is_finished());
        assert_eq!(board.average_slot_index(), 0.0);
    }

    #[test]
    fn queries_reject_out_of_range_rows() {
        let board = TestBoard::new(3).unwrap();
        let err = BoardError::RowOutOfRange {
            row: 3,
            slot_count: 3,
        };
        assert_eq!(board.in_flight_column(3), Err(err.clone()));
        assert_eq!(board.slot_bean_count(3), Err(err));
        assert!(board.slot_beans(5).is_err());
    }

    // ── reset / repeat ──────────────────────────────────────────

    #[test]
    fn reset_admits_first_bean() {
        let mut board = TestBoard::new(4).unwrap();
        board.reset(skill_beans(&[1, 2, 3]));
        assert_eq!(board.backlog_count(), 2);
        assert_eq!(board.in_flight_count(), 1);
        assert_eq!(board.in_flight_column(0), Ok(Some(0)));
        assert_eq!(board.slotted_count(), 0);
        assert_eq!(board.loaded_count(), 3);
        assert!(!board.is_finished());
    }

    #[test]
    fn reset_with_no_beans_leaves_empty_machine() {
        let mut board = TestBoard::new(4).unwrap();
        board.reset(skill_beans(&[1, 2]));
        run_to_end(&mut board);
        board.reset(Vec::new());
        assert_eq!(board.loaded_count(), 0);
        assert!(board.is_finished());
        assert_eq!(board.slotted_count(), 0);
        assert!(!board.advance_step());
    }

    #[test]
    fn reset_discards_previous_state() {
        let mut board = TestBoard::new(3).unwrap();
        board.reset(skill_beans(&[0, 1, 2, 3]));
        board.advance_step();
        board.advance_step();
        board.reset(skill_beans(&[2]));
        assert_eq!(board.loaded_count(), 1);
        assert_eq!(board.backlog_count(), 0);
        assert_eq!(columns(&board), vec![Some(0), None, None]);
        assert_eq!(board.tick(), TickId(0));
    }

    #[test]
    fn clear_empties_board() {
        let mut board = TestBoard::new(2).unwrap();
        board.reset(skill_beans(&[0, 1]));
        board.clear();
        assert!(board.is_finished());
        assert_eq!(board.loaded_count(), 0);
    }

    #[test]
    fn repeat_mid_run_scoops_everything() {
        let mut board = TestBoard::new(3).unwrap();
        board.reset(skill_beans(&[0, 1, 2, 3, 4]));
        for _ in 0..4 {
            board.advance_step();
        }
        assert!(board.slotted_count() > 0);
        board.repeat();
        assert_eq!(board.slotted_count(), 0);
        assert_eq!(board.in_flight_count(), 1);
        assert_eq!(board.backlog_count(), 4);
        assert_eq!(board.in_flight_column(0), Ok(Some(0)));
        assert_eq!(board.tick(), TickId(0));
    }

    #[test]
    fn repeat_resets_descent_state() {
        let mut board = TestBoard::new(4).unwrap();
        board.reset(skill_beans(&[3]));
        run_to_end(&mut board);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 0, 1]);
        board.repeat();
        assert_eq!(board.in_flight_column(0), Ok(Some(0)));
        run_to_end(&mut board);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 0, 1]);
    }

    // ── advance_step ────────────────────────────────────────────

    #[test]
    fn skill_scenario_four_slots() {
        let mut board = TestBoard::new(4).unwrap();
        board.reset(skill_beans(&[0, 4, 2]));
        run_to_end(&mut board);
        assert_eq!(board.slot_bean_counts(), vec![1, 0, 1, 1]);
        assert_eq!(slot_levels(&board, 0), vec![0]);
        assert_eq!(slot_levels(&board, 2), vec![2]);
        assert_eq!(slot_levels(&board, 3), vec![4]);
    }

    #[test]
    fn beans_shift_down_one_row_per_tick() {
        let mut board = TestBoard::new(3).unwrap();
        board.reset(skill_beans(&[5, 5, 0]));
        assert_eq!(columns(&board), vec![Some(0), None, None]);

        assert!(board.advance_step());
        assert_eq!(columns(&board), vec![Some(0), Some(1), None]);

        assert!(board.advance_step());
        assert_eq!(columns(&board), vec![Some(0), Some(1), Some(2)]);

        assert!(board.advance_step());
        assert_eq!(columns(&board), vec![None, Some(0), Some(2)]);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 1]);

        assert!(board.advance_step());
        assert_eq!(columns(&board), vec![None, None, Some(0)]);

        assert!(board.advance_step());
        assert_eq!(columns(&board), vec![None, None, None]);
        assert_eq!(board.slot_bean_counts(), vec![1, 0, 2]);

        assert!(!board.advance_step());
        assert_eq!(board.tick(), TickId(5));
    }

    #[test]
    fn run_length_is_beans_plus_rows_minus_one() {
        for slot_count in 1..6 {
            for beans in 1..6 {
                let mut board = TestBoard::new(slot_count).unwrap();
                board.reset((0..beans).map(|_| skill_bean(1)));
                let ticks = run_to_end(&mut board);
                assert_eq!(ticks, (beans + slot_count - 1) as u64);
            }
        }
    }

    #[test]
    fn single_slot_deposits_immediately() {
        let mut board = TestBoard::new(1).unwrap();
        board.reset(skill_beans(&[7, -2]));
        assert!(board.advance_step());
        assert_eq!(board.slot_bean_counts(), vec![1]);
        assert!(board.advance_step());
        assert_eq!(board.slot_bean_counts(), vec![2]);
        assert!(!board.advance_step());
    }

    #[test]
    fn luck_bean_follows_its_flips() {
        let mut board = TestBoard::new(5).unwrap();
        board.reset(vec![luck_bean(&[true, false, true, true])]);
        run_to_end(&mut board);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 0, 1, 0]);
    }

    #[test]
    fn finished_board_stays_finished() {
        let mut board = TestBoard::new(2).unwrap();
        board.reset(skill_beans(&[1]));
        run_to_end(&mut board);
        assert!(!board.advance_step());
        assert!(!board.advance_step());
        assert_eq!(board.slotted_count(), 1);
    }

    // ── Statistics and trims ────────────────────────────────────

    #[test]
    fn average_is_weighted_mean() {
        let board = board_with_slots(&[1, 0, 3, 0]);
        // (0 * 1 + 2 * 3) / 4
        assert!((board.average_slot_index() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn upper_half_drains_from_bottom_slot() {
        let mut board = board_with_slots(&[2, 3, 1]);
        assert_eq!(board.upper_half(), 3);
        assert_eq!(board.slot_bean_counts(), vec![0, 2, 1]);
        // Oldest bean of slot 1 went first.
        assert_eq!(slot_levels(&board, 1), vec![101, 102]);
        assert_eq!(board.loaded_count(), 3);
    }

    #[test]
    fn lower_half_drains_from_top_slot() {
        let mut board = board_with_slots(&[2, 3, 1]);
        assert_eq!(board.lower_half(), 3);
        assert_eq!(board.slot_bean_counts(), vec![2, 1, 0]);
        assert_eq!(slot_levels(&board, 1), vec![102]);
    }

    #[test]
    fn odd_totals_keep_larger_half() {
        let mut upper = board_with_slots(&[1, 1, 1]);
        assert_eq!(upper.upper_half(), 1);
        assert_eq!(upper.slot_bean_counts(), vec![0, 1, 1]);

        let mut lower = board_with_slots(&[1, 1, 1]);
        assert_eq!(lower.trim(Half::Lower), 1);
        assert_eq!(lower.slot_bean_counts(), vec![1, 1, 0]);
    }

    #[test]
    fn trims_skip_empty_slots() {
        let mut board = board_with_slots(&[0, 0, 4, 0, 2]);
        assert_eq!(board.trim(Half::Upper), 3);
        assert_eq!(board.slot_bean_counts(), vec![0, 0, 1, 0, 2]);

        let mut board = board_with_slots(&[3, 0, 0, 0, 1]);
        assert_eq!(board.trim(Half::Lower), 2);
        assert_eq!(board.slot_bean_counts(), vec![2, 0, 0, 0, 0]);
    }

    #[test]
    fn trims_of_one_or_none_are_noops() {
        let mut board = board_with_slots(&[0, 1]);
        assert_eq!(board.upper_half(), 0);
        assert_eq!(board.lower_half(), 0);
        assert_eq!(board.slot_bean_counts(), vec![0, 1]);

        let mut empty = TestBoard::new(3).unwrap();
        assert_eq!(empty.upper_half(), 0);
    }

    #[test]
    fn snapshot_matches_queries() {
        let mut board = TestBoard::new(3).unwrap();
        board.reset(skill_beans(&[2, 2, 2, 2]));
        board.advance_step();
        board.advance_step();
        let snap = board.snapshot();
        assert_eq!(snap.tick, board.tick());
        assert_eq!(snap.backlog, board.backlog_count());
        assert_eq!(snap.in_flight, columns(&board));
        assert_eq!(snap.slot_counts, board.slot_bean_counts());
        assert_eq!(snap.total_beans(), board.loaded_count());
    }
}
