//! Core types and traits for the Quincunx bean-counter simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the bean, engine, and rendering crates:
//! decision modes, tick IDs, error types, the [`RandomSource`] seam,
//! and the read-only [`BoardSnapshot`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod mode;
pub mod random;
pub mod snapshot;

pub use error::BoardError;
pub use id::TickId;
pub use mode::DecisionMode;
pub use random::RandomSource;
pub use snapshot::BoardSnapshot;
