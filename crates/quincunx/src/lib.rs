//! Quincunx: a step-driven Galton board simulation.
//!
//! Beans enter at the top of a triangular lattice of pegs, fall one row
//! per tick, and come to rest in one of `slot_count` slots. Each bean
//! either flips a coin at every peg (luck) or goes right a fixed number of
//! times drawn from a normal distribution (skill).
//!
//! This facade re-exports the sub-crates. Most users only need the
//! [`prelude`].
//!
//! # Quick start
//!
//! ```rust
//! use quincunx::prelude::*;
//!
//! let config = ExperimentConfig::new(5, 100, DecisionMode::Luck);
//! let mut experiment = Experiment::new(config).unwrap();
//! let metrics = experiment.run(|_| {});
//! assert_eq!(metrics.slot_counts.iter().sum::<usize>(), 100);
//!
//! let renderer = TextRenderer::default();
//! let line = renderer.slots(&experiment.board().snapshot()).to_string();
//! assert_eq!(line.split_whitespace().count(), 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quincunx-core` | Errors, modes, the random source seam, snapshots |
//! | [`bean`] | `quincunx-bean` | Beans, skill sampling, seeded batches |
//! | [`engine`] | `quincunx-engine` | The board and experiment driver |
//! | [`render`] | `quincunx-render` | Text rendering of snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`quincunx-core`).
pub use quincunx_core as types;

/// Beans and their decision policies (`quincunx-bean`).
///
/// [`bean::BeanBatch`] builds reproducible batches from one seed.
pub use quincunx_bean as bean;

/// The board and experiment driver (`quincunx-engine`).
pub use quincunx_engine as engine;

/// Text rendering (`quincunx-render`).
pub use quincunx_render as render;

/// Common imports for typical Quincunx usage.
pub mod prelude {
    // Core types
    pub use quincunx_core::{BoardSnapshot, DecisionMode, RandomSource, TickId};

    // Errors
    pub use quincunx_core::BoardError;
    pub use quincunx_engine::ConfigError;
    pub use quincunx_render::RenderError;

    // Beans
    pub use quincunx_bean::{Bean, BeanBatch};

    // Engine
    pub use quincunx_engine::{Board, Experiment, ExperimentConfig, Half, RunEvent, RunMetrics};

    // Rendering
    pub use quincunx_render::TextRenderer;
}
