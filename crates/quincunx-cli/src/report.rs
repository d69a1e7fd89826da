//! Running an experiment and writing its text report.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use quincunx_engine::{ConfigError, Experiment, RunEvent, RunMetrics};
use quincunx_render::{RenderError, TextRenderer};
use rand::Rng;

use crate::cli::Cli;

// ── CliError ───────────────────────────────────────────────────────

/// Errors that end a `bean-counter` invocation.
#[derive(Debug)]
pub enum CliError {
    /// The arguments describe an invalid experiment.
    Config(ConfigError),
    /// The lattice spacing was rejected.
    Render(RenderError),
    /// Writing the report failed.
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid experiment: {e}"),
            Self::Render(e) => write!(f, "invalid layout: {e}"),
            Self::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ── run ────────────────────────────────────────────────────────────

/// Run the experiment described by `cli`, writing the report to `out`.
///
/// Returns the metrics of every run.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Vec<RunMetrics>, CliError> {
    let renderer = TextRenderer::new(cli.spacing)?;
    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::rng().random::<u64>();
            tracing::info!(seed, "drew seed from entropy");
            seed
        }
    };
    let mut experiment = Experiment::new(cli.experiment_config(seed))?;
    let labelled = cli.runs > 1;
    let debug = cli.debug_enabled();

    // The observer cannot return an error; keep the first one.
    let mut write_error = None;
    let results = experiment.run_all(|event| {
        if write_error.is_none() {
            if let Err(e) = write_event(out, &renderer, event, labelled, debug) {
                write_error = Some(e);
            }
        }
    });
    match write_error {
        Some(e) => Err(e.into()),
        None => Ok(results),
    }
}

fn write_event<W: Write>(
    out: &mut W,
    renderer: &TextRenderer,
    event: RunEvent<'_>,
    labelled: bool,
    debug: bool,
) -> io::Result<()> {
    match event {
        RunEvent::Started { run, snapshot } => {
            if labelled {
                writeln!(out, "Run {}:", run + 1)?;
            }
            if debug {
                writeln!(out, "{}", renderer.lattice(snapshot))?;
            }
        }
        RunEvent::Ticked(snapshot) => {
            if debug {
                writeln!(out, "{}", renderer.lattice(snapshot))?;
            }
        }
        RunEvent::Finished { metrics, snapshot } => {
            writeln!(out, "Slot bean counts:")?;
            writeln!(out, "{}", renderer.slots(snapshot))?;
            if metrics.beans_trimmed > 0 {
                writeln!(out, "Beans trimmed: {}", metrics.beans_trimmed)?;
            }
            writeln!(out, "Average slot index: {:.2}", metrics.average_slot_index)?;
        }
    }
    Ok(())
}
