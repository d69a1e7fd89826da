//! Fixed-width text layout of the lattice and slots.
//!
//! Every number occupies a right-aligned cell of `x_spacing + 1`
//! characters. Row `y` is indented so the lattice forms a centred
//! triangle over the slot line: each row starts half a cell further
//! left than the row above it.

use std::fmt;

use quincunx_core::BoardSnapshot;

use crate::error::RenderError;

/// Renders snapshots as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    x_spacing: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { x_spacing: 3 }
    }
}

impl TextRenderer {
    /// Create a renderer with `x_spacing` spaces between numbers.
    ///
    /// Returns `Err(RenderError::InvalidSpacing)` unless `x_spacing` is odd.
    pub fn new(x_spacing: usize) -> Result<Self, RenderError> {
        if x_spacing % 2 == 0 {
            return Err(RenderError::InvalidSpacing { value: x_spacing });
        }
        Ok(Self { x_spacing })
    }

    /// Spaces between numbers.
    pub fn x_spacing(&self) -> usize {
        self.x_spacing
    }

    fn cell_width(&self) -> usize {
        self.x_spacing + 1
    }

    /// Width of the first cell on `row` for a board of `slot_count` rows.
    fn indent(&self, slot_count: usize, row: usize) -> usize {
        let cell = self.cell_width();
        let root = (slot_count - 1) * cell / 2 + cell;
        root - cell / 2 * row
    }

    /// The slot bean counts on a single line.
    pub fn slots<'a>(&self, snapshot: &'a BoardSnapshot) -> SlotLine<'a> {
        SlotLine {
            renderer: *self,
            snapshot,
        }
    }

    /// The full lattice followed by the slot line.
    pub fn lattice<'a>(&self, snapshot: &'a BoardSnapshot) -> LatticeText<'a> {
        LatticeText {
            renderer: *self,
            snapshot,
        }
    }
}

/// [`Display`](fmt::Display) adapter for the slot count line.
#[derive(Clone, Copy, Debug)]
pub struct SlotLine<'a> {
    renderer: TextRenderer,
    snapshot: &'a BoardSnapshot,
}

impl fmt::Display for SlotLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.renderer.cell_width();
        for count in &self.snapshot.slot_counts {
            write!(f, "{count:>width$}")?;
        }
        Ok(())
    }
}

/// [`Display`](fmt::Display) adapter for the lattice and slot line.
#[derive(Clone, Copy, Debug)]
pub struct LatticeText<'a> {
    renderer: TextRenderer,
    snapshot: &'a BoardSnapshot,
}

impl fmt::Display for LatticeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot_count = self.snapshot.slot_count();
        let cell = self.renderer.cell_width();
        for (row, occupant) in self.snapshot.in_flight.iter().enumerate() {
            for column in 0..=row {
                let width = if column == 0 {
                    self.renderer.indent(slot_count, row)
                } else {
                    cell
                };
                let marker = u8::from(*occupant == Some(column));
                write!(f, "{marker:>width$}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.renderer.slots(self.snapshot))
    }
}
