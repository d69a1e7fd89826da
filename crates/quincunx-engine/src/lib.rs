//! Step-driven Galton board engine.
//!
//! [`Board`] owns every bean loaded into the machine and advances the
//! simulation one logical tick per [`advance_step`](Board::advance_step)
//! call. [`Experiment`] wraps a board with a seeded bean batch built
//! from an [`ExperimentConfig`] and drives it to completion, reporting
//! [`RunMetrics`] for each run.
//!
//! The engine is single-threaded and has no notion of wall-clock time:
//! the caller's loop is the clock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod experiment;
pub mod metrics;

pub use board::{Board, Half};
pub use config::{ConfigError, ExperimentConfig, MAX_RUNS};
pub use experiment::{Experiment, RunEvent};
pub use metrics::RunMetrics;
