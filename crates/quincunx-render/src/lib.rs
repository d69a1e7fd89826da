//! Text rendering of Quincunx board snapshots.
//!
//! Renders a [`BoardSnapshot`](quincunx_core::BoardSnapshot) as the
//! triangular peg lattice, with `1` where an in-flight bean sits above a
//! peg and `0` elsewhere, followed by a line of slot bean counts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod text;

pub use error::RenderError;
pub use text::{LatticeText, SlotLine, TextRenderer};
