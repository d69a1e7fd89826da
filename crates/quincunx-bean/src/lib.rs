//! Beans for the Quincunx bean-counter simulation.
//!
//! A [`Bean`] is a single falling unit: a fixed decision policy
//! ([`DecisionMode`](quincunx_core::DecisionMode) plus a skill level)
//! and the mutable state of its current descent. [`SkillDistribution`]
//! draws skill levels, and [`BeanBatch`] produces reproducible sets of
//! beans from a single seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod bean;
pub mod skill;

pub use batch::BeanBatch;
pub use bean::Bean;
pub use skill::SkillDistribution;
