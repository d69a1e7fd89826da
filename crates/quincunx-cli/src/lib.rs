//! The `bean-counter` command.
//!
//! Parses arguments with [`cli::Cli`], builds an
//! [`ExperimentConfig`](quincunx_engine::ExperimentConfig), and writes the
//! slot counts (and, with `--debug`, every frame of the lattice) to any
//! [`Write`](std::io::Write) sink.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod report;
pub mod telemetry;

pub use cli::{Cli, DebugWord, ModeArg, TrimArg};
pub use report::{run, CliError};
